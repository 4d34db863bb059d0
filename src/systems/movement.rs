//! Linear motion integration.

use bevy_ecs::prelude::*;

use crate::components::position::Position;
use crate::components::velocity::Velocity;
use crate::error::SimError;
use crate::resources::worldtime::WorldTime;

/// The one linear integration step, `position += velocity * dt`.
#[inline]
fn step(position: &mut Position, velocity: &Velocity, dt: f64) {
    position.0 += velocity.0 * dt;
}

/// Advance one entity's position by `velocity * dt`, component-wise.
///
/// Pure linear integration; there is no acceleration model. Negative deltas
/// are rejected with [`SimError::InvalidArgument`] before any mutation, and
/// `dt == 0` is a no-op.
pub fn integrate(position: &mut Position, velocity: &Velocity, dt: f64) -> Result<(), SimError> {
    if dt < 0.0 {
        return Err(SimError::InvalidArgument(format!(
            "time delta must be non-negative, got {dt}"
        )));
    }
    step(position, velocity, dt);
    Ok(())
}

/// System that integrates all entities by the current tick delta.
///
/// Reads [`WorldTime::delta`], which is already scaled and never negative
/// because the scheduler only feeds it the nominal tick delta multiplied by
/// a validated non-negative time scale, so no per-entity validation happens
/// here.
pub fn movement_system(mut query: Query<(&mut Position, &Velocity)>, time: Res<WorldTime>) {
    let dt = time.delta;
    for (mut position, velocity) in query.iter_mut() {
        step(&mut position, velocity, dt);
    }
}
