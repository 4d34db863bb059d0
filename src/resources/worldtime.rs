//! Simulation time resource.

use bevy_ecs::prelude::Resource;

use crate::error::SimError;

/// Elapsed simulation time, per-tick delta, and the time scale multiplier.
///
/// `elapsed` grows only while the lifecycle is `Playing` and never decreases.
/// `delta` is the scaled delta applied on the most recent tick; the movement
/// system reads it to integrate positions.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f64,
    pub delta: f64,
    time_scale: f64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Replace the time scale multiplier.
    ///
    /// Takes effect on the next tick; elapsed time already accumulated is
    /// never recomputed. Negative scales are rejected with
    /// [`SimError::InvalidArgument`] and leave the current value in place.
    pub fn set_time_scale(&mut self, scale: f64) -> Result<(), SimError> {
        if scale < 0.0 {
            return Err(SimError::InvalidArgument(format!(
                "time scale must be non-negative, got {scale}"
            )));
        }
        self.time_scale = scale;
        Ok(())
    }
}
