//! Ship fuel tank resource.

use bevy_ecs::prelude::Resource;

use crate::error::SimError;

/// Fuel consumed per successful launch, in percent.
pub const LAUNCH_FUEL_COST: u8 = 10;

/// Remaining ship fuel as an integer percentage in [0, 100].
///
/// Fuel only changes through [`FuelTank::consume_for_launch`]; a failed
/// launch never mutates it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelTank {
    percent: u8,
}

impl Default for FuelTank {
    fn default() -> Self {
        FuelTank { percent: 100 }
    }
}

impl FuelTank {
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Consume fuel for one launch and return the remaining percentage.
    ///
    /// Fails with [`SimError::InsufficientFuel`] when the tank is empty,
    /// leaving the level unchanged. The decrement saturates at zero.
    pub fn consume_for_launch(&mut self) -> Result<u8, SimError> {
        if self.percent == 0 {
            return Err(SimError::InsufficientFuel);
        }
        self.percent = self.percent.saturating_sub(LAUNCH_FUEL_COST);
        Ok(self.percent)
    }
}
