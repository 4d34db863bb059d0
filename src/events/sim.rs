//! Messages crossing the scheduler thread boundary.

use serde::Serialize;

use crate::resources::lifecycle::LifecycleStates;

/// Commands sent *to* the scheduler thread.
///
/// All pending commands are drained and applied at the start of a tick, so a
/// command takes effect no later than the next tick after it is sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    /// One-time gate out of the `Start` state into `Playing`.
    AcknowledgeStart,
    /// Toggle between `Playing` and `Paused`. Ignored while in `Start`.
    TogglePauseResume,
    /// Replace the time scale multiplier. Negative values are rejected on
    /// the sending side; the scheduler re-validates and logs a warning.
    SetTimeScale(f64),
    /// Attempt a ship launch, consuming fuel on success.
    RequestLaunch,
    /// Halt the scheduler loop. No new tick begins after this is processed.
    Stop,
}

/// Events sent *back* from the scheduler thread.
///
/// Within one tick, `TimeChanged` is always emitted before
/// `EntitiesChanged`, and all events of tick N are sent before tick N+1
/// begins. Every payload is an owned snapshot; later world mutation never
/// alters an event already delivered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimEvent {
    LifecycleChanged(LifecycleStates),
    TimeChanged(f64),
    EntitiesChanged(Vec<AsteroidSnapshot>),
    FuelChanged(u8),
    LogMessage(String),
}

/// Immutable copy of one asteroid's state at emission time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidSnapshot {
    pub id: String,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub raw_mass: f64,
    pub purity: f64,
}

impl AsteroidSnapshot {
    /// Extractable material mass, `raw_mass * purity`.
    pub fn material_mass(&self) -> f64 {
        self.raw_mass * self.purity
    }
}
