//! Snapshot extraction for outbound events.

use bevy_ecs::prelude::*;

use crate::components::asteroid::Asteroid;
use crate::components::position::Position;
use crate::components::velocity::Velocity;
use crate::events::sim::AsteroidSnapshot;

/// Copy every asteroid's state into owned snapshots.
///
/// Snapshots cross the thread boundary by value; mutating the world after
/// this call never changes a snapshot already produced.
pub fn collect_snapshots(world: &mut World) -> Vec<AsteroidSnapshot> {
    let mut query = world.query::<(&Asteroid, &Position, &Velocity)>();
    query
        .iter(world)
        .map(|(asteroid, position, velocity)| AsteroidSnapshot {
            id: asteroid.id().to_string(),
            position: [position.0.x, position.0.y, position.0.z],
            velocity: [velocity.0.x, velocity.0.y, velocity.0.z],
            raw_mass: asteroid.raw_mass(),
            purity: asteroid.purity(),
        })
        .collect()
}
