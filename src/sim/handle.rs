//! Presentation-side handle for the scheduler thread.
//!
//! Use [`SimHandle::spawn`] once per session to start the thread and obtain
//! the command/event bridge. Commands are validated synchronously where
//! possible before being enqueued; events are drained from
//! [`SimHandle::events`]. Call [`SimHandle::stop`] (or drop the handle) to
//! halt the scheduler and join the thread.

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

use crate::error::SimError;
use crate::events::sim::{SimCommand, SimEvent};
use crate::resources::simconfig::SimConfig;
use crate::sim::scheduler::sim_thread;

/// Bridge between the presentation side and the scheduler thread.
///
/// The handle is the only way to affect the simulation: the world itself
/// never leaves the scheduler thread.
pub struct SimHandle {
    tx_cmd: Sender<SimCommand>,
    rx_evt: Receiver<SimEvent>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl SimHandle {
    /// Spawn the scheduler thread for one simulation session.
    pub fn spawn(config: SimConfig) -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<SimCommand>();
        let (tx_evt, rx_evt) = unbounded::<SimEvent>();

        let handle = std::thread::spawn(move || sim_thread(rx_cmd, tx_evt, config));

        SimHandle {
            tx_cmd,
            rx_evt,
            handle: Some(handle),
        }
    }

    /// One-time gate out of `Start`; begins simulation advancement.
    pub fn acknowledge_start(&self) {
        let _ = self.tx_cmd.send(SimCommand::AcknowledgeStart);
    }

    /// Toggle between `Playing` and `Paused`.
    pub fn toggle_pause_resume(&self) {
        let _ = self.tx_cmd.send(SimCommand::TogglePauseResume);
    }

    /// Request a ship launch.
    pub fn request_launch(&self) {
        let _ = self.tx_cmd.send(SimCommand::RequestLaunch);
    }

    /// Replace the time scale multiplier.
    ///
    /// Negative scales are rejected here, synchronously, before any command
    /// is enqueued.
    pub fn set_time_scale(&self, scale: f64) -> Result<(), SimError> {
        if scale < 0.0 {
            return Err(SimError::InvalidArgument(format!(
                "time scale must be non-negative, got {scale}"
            )));
        }
        let _ = self.tx_cmd.send(SimCommand::SetTimeScale(scale));
        Ok(())
    }

    /// Receiver for events emitted by the scheduler thread.
    pub fn events(&self) -> &Receiver<SimEvent> {
        &self.rx_evt
    }

    /// Request shutdown and join the scheduler thread. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.tx_cmd.send(SimCommand::Stop);
            if handle.join().is_err() {
                warn!("Scheduler thread panicked before join");
            }
        }
    }
}

impl Drop for SimHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
