//! Asteroid component: identity, raw mass, purity, and mining.
//!
//! The extractable value of an asteroid is its *material mass*,
//! `raw_mass * purity`. It is always recomputed, never stored.

use bevy_ecs::prelude::Component;

use crate::error::SimError;

/// Mineable asteroid data.
///
/// `id` is assigned once at creation by
/// [`AsteroidIdRegistry`](crate::resources::idregistry::AsteroidIdRegistry)
/// and never changes. `raw_mass` only decreases, via [`Asteroid::mine`], and
/// never goes below zero. `purity` is fixed at creation and lies in (0, 1].
#[derive(Component, Clone, Debug)]
pub struct Asteroid {
    id: String,
    raw_mass: f64,
    purity: f64,
}

impl Asteroid {
    pub fn new(id: String, raw_mass: f64, purity: f64) -> Self {
        debug_assert!(raw_mass >= 0.0);
        debug_assert!(purity > 0.0 && purity <= 1.0);
        Self {
            id,
            raw_mass,
            purity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw_mass(&self) -> f64 {
        self.raw_mass
    }

    pub fn purity(&self) -> f64 {
        self.purity
    }

    /// Extractable material mass, `raw_mass * purity`.
    pub fn material_mass(&self) -> f64 {
        self.raw_mass * self.purity
    }

    /// Extract up to `amount` of raw mass and return the yielded material.
    ///
    /// Mines `min(amount, raw_mass)`, decrements the raw mass, and returns
    /// the mined mass scaled by purity. A zero amount is a no-op. Negative
    /// amounts are rejected with [`SimError::InvalidArgument`] before any
    /// mutation.
    pub fn mine(&mut self, amount: f64) -> Result<f64, SimError> {
        if amount < 0.0 {
            return Err(SimError::InvalidArgument(format!(
                "mine amount must be non-negative, got {amount}"
            )));
        }
        let mined = amount.min(self.raw_mass);
        self.raw_mass -= mined;
        Ok(mined * self.purity)
    }
}
