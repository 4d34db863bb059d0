//! High-level lifecycle state resource.
//!
//! The lifecycle gates simulation advancement: the scheduler only advances
//! time and positions while the state is [`LifecycleStates::Playing`]. See
//! [`crate::sim::scheduler`] for how commands drive the transitions.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Discrete lifecycle states of a simulation session.
///
/// Transitions:
/// - `Start -> Playing` via the one-time acknowledge-start command
/// - `Playing <-> Paused` via the pause/resume toggle
///
/// No transition leads back to `Start` and there is no terminal state; the
/// session ends when the scheduler thread is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LifecycleStates {
    #[default]
    Start,
    Playing,
    Paused,
}

/// Authoritative current lifecycle state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Lifecycle {
    current: LifecycleStates,
}

impl Lifecycle {
    /// Create a new lifecycle initialized to [`LifecycleStates::Start`].
    pub fn new() -> Self {
        Lifecycle {
            current: LifecycleStates::Start,
        }
    }

    /// Read the current state.
    pub fn get(&self) -> LifecycleStates {
        self.current
    }

    /// Update the current state immediately.
    ///
    /// The command handler emits a lifecycle-changed event on every call to
    /// this setter, whether or not the state actually differs.
    pub fn set(&mut self, state: LifecycleStates) {
        self.current = state;
    }

    /// True while simulation advancement is permitted.
    pub fn is_playing(&self) -> bool {
        matches!(self.current, LifecycleStates::Playing)
    }
}
