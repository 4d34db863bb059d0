//! Fixed-timestep scheduler loop.
//!
//! This module hosts the simulation thread and the world operations it
//! performs each tick:
//! - [`build_world`] constructs the ECS world for one session: resources,
//!   the randomized asteroid field, lifecycle in `Start`, fuel at 100%.
//! - [`apply_command`] applies one inbound command to the world and emits
//!   the corresponding events.
//! - [`advance`] performs one semantic update while `Playing` and emits
//!   `TimeChanged` then `EntitiesChanged`.
//! - [`sim_thread`] ties them together at a fixed target tick rate.
//!
//! Concurrency model:
//! - The thread exclusively owns the [`World`]; commands are the only way
//!   other actors cause mutation.
//! - Uses `crossbeam_channel` for lock-free message passing in both
//!   directions; event sends never block (unbounded channel) and send
//!   errors after the receiver is dropped are ignored.
//! - Each tick measures wall-clock drift for diagnostics only; the semantic
//!   update always uses the fixed nominal delta `1 / target_tps`.
//!
//! The loop blocks only in the end-of-tick sleep and exits when it receives
//! [`SimCommand::Stop`]; in-flight tick work is never interrupted.

use std::time::{Duration, Instant};

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use fastrand::Rng;
use log::{debug, info, trace, warn};

use crate::events::sim::{SimCommand, SimEvent};
use crate::resources::fuel::FuelTank;
use crate::resources::idregistry::AsteroidIdRegistry;
use crate::resources::lifecycle::{Lifecycle, LifecycleStates};
use crate::resources::simconfig::SimConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::movement_system;
use crate::systems::snapshot::collect_snapshots;
use crate::systems::spawn::spawn_asteroids;
use crate::systems::time::update_world_time;

/// Construct the world for one simulation session.
///
/// Inserts [`WorldTime`], [`Lifecycle`] (in `Start`), [`FuelTank`] (100%),
/// and [`AsteroidIdRegistry`], then spawns the configured asteroid field.
pub fn build_world(config: &SimConfig, rng: &mut Rng) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Lifecycle::new());
    world.insert_resource(FuelTank::default());
    world.insert_resource(AsteroidIdRegistry::new());
    spawn_asteroids(&mut world, config, rng);
    world
}

/// Build the per-tick schedule. Movement is the only system today; new
/// per-entity behavior slots in here.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement_system);
    schedule
}

/// Set the lifecycle state and emit `LifecycleChanged`.
///
/// The event fires on every call, even when `state` equals the current
/// value.
fn set_lifecycle(world: &mut World, state: LifecycleStates, tx_evt: &Sender<SimEvent>) {
    world.resource_mut::<Lifecycle>().set(state);
    info!("Lifecycle set to {state:?}");
    let _ = tx_evt.send(SimEvent::LifecycleChanged(state));
}

/// Apply one command to the world, emitting any resulting events.
///
/// Returns `false` when the command was [`SimCommand::Stop`] and the loop
/// should halt.
pub fn apply_command(world: &mut World, cmd: SimCommand, tx_evt: &Sender<SimEvent>) -> bool {
    match cmd {
        SimCommand::AcknowledgeStart => {
            if world.resource::<Lifecycle>().get() == LifecycleStates::Start {
                set_lifecycle(world, LifecycleStates::Playing, tx_evt);
            } else {
                debug!("AcknowledgeStart ignored: session already started");
            }
        }
        SimCommand::TogglePauseResume => match world.resource::<Lifecycle>().get() {
            LifecycleStates::Playing => set_lifecycle(world, LifecycleStates::Paused, tx_evt),
            LifecycleStates::Paused => set_lifecycle(world, LifecycleStates::Playing, tx_evt),
            LifecycleStates::Start => {
                debug!("TogglePauseResume ignored while in Start");
            }
        },
        SimCommand::SetTimeScale(scale) => {
            match world.resource_mut::<WorldTime>().set_time_scale(scale) {
                Ok(()) => debug!("Time scale set to {scale}"),
                Err(e) => warn!("Rejected time scale {scale}: {e}"),
            }
        }
        SimCommand::RequestLaunch => {
            let result = world.resource_mut::<FuelTank>().consume_for_launch();
            match result {
                Ok(remaining) => {
                    let message = format!("Launching ship! Fuel remaining: {remaining}%");
                    info!("{message}");
                    let _ = tx_evt.send(SimEvent::FuelChanged(remaining));
                    let _ = tx_evt.send(SimEvent::LogMessage(message));
                }
                Err(_) => {
                    let message = "Not enough fuel to launch!".to_string();
                    info!("{message}");
                    let _ = tx_evt.send(SimEvent::LogMessage(message));
                }
            }
        }
        SimCommand::Stop => {
            info!("Stop requested, scheduler halting");
            return false;
        }
    }
    true
}

/// Perform one semantic update.
///
/// Strict no-op unless the lifecycle is `Playing`. Otherwise accumulates
/// `dt * time_scale`, integrates every entity, and only after mutation
/// completes emits `TimeChanged` followed by `EntitiesChanged`.
pub fn advance(world: &mut World, schedule: &mut Schedule, dt: f64, tx_evt: &Sender<SimEvent>) {
    if !world.resource::<Lifecycle>().is_playing() {
        return;
    }
    update_world_time(world, dt);
    schedule.run(world);

    let elapsed = world.resource::<WorldTime>().elapsed;
    let _ = tx_evt.send(SimEvent::TimeChanged(elapsed));
    let _ = tx_evt.send(SimEvent::EntitiesChanged(collect_snapshots(world)));
}

/// Entry point of the dedicated scheduler thread.
///
/// Responsibilities:
/// - Build the world once and own it for the life of the thread.
/// - Each tick: drain pending commands, advance if `Playing`, then sleep
///   for the remainder of the nominal period. When tick work overruns the
///   budget the loop proceeds immediately instead of sleeping; ticks are
///   never skipped.
///
/// This function blocks until it receives [`SimCommand::Stop`].
pub fn sim_thread(rx_cmd: Receiver<SimCommand>, tx_evt: Sender<SimEvent>, config: SimConfig) {
    info!(
        "Scheduler thread starting (id={:?}, target {} tps)",
        std::thread::current().id(),
        config.target_tps
    );

    let mut rng = Rng::new();
    let mut world = build_world(&config, &mut rng);
    let mut schedule = build_schedule();

    let nominal_dt = config.nominal_dt();
    let period = Duration::from_secs_f64(nominal_dt);
    let mut last_tick = Instant::now();

    'run: loop {
        let tick_start = Instant::now();
        // Measured drift is diagnostic only; the semantic update always
        // uses the fixed nominal delta.
        let wall_delta = tick_start.duration_since(last_tick);
        last_tick = tick_start;
        trace!("Tick: wall delta {:.3} ms", wall_delta.as_secs_f64() * 1e3);

        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            if !apply_command(&mut world, cmd, &tx_evt) {
                break 'run;
            }
        }

        // 2) Advance while Playing
        advance(&mut world, &mut schedule, nominal_dt, &tx_evt);

        // 3) Sleep the remainder of the tick budget, if any
        if let Some(remaining) = period.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(
        "Scheduler thread exiting (id={:?})",
        std::thread::current().id()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn playing_world(config: &SimConfig) -> World {
        let mut rng = Rng::with_seed(5);
        let mut world = build_world(config, &mut rng);
        world.resource_mut::<Lifecycle>().set(LifecycleStates::Playing);
        world
    }

    #[test]
    fn test_advance_is_noop_outside_playing() {
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(5);
        let mut world = build_world(&config, &mut rng);
        let mut schedule = build_schedule();
        let (tx, rx) = unbounded();

        // Start
        advance(&mut world, &mut schedule, 1.0, &tx);
        assert_eq!(world.resource::<WorldTime>().elapsed, 0.0);
        assert!(rx.try_recv().is_err());

        // Paused
        world.resource_mut::<Lifecycle>().set(LifecycleStates::Paused);
        advance(&mut world, &mut schedule, 1.0, &tx);
        assert_eq!(world.resource::<WorldTime>().elapsed, 0.0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_advance_accumulates_scaled_time() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let mut schedule = build_schedule();
        let (tx, _rx) = unbounded();

        world.resource_mut::<WorldTime>().set_time_scale(2.0).unwrap();
        advance(&mut world, &mut schedule, 0.5, &tx);
        assert!((world.resource::<WorldTime>().elapsed - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_advance_emits_time_before_entities() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let mut schedule = build_schedule();
        let (tx, rx) = unbounded();

        advance(&mut world, &mut schedule, 0.1, &tx);
        let events: Vec<SimEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SimEvent::TimeChanged(_)));
        assert!(matches!(events[1], SimEvent::EntitiesChanged(_)));
    }

    #[test]
    fn test_acknowledge_start_transitions_once() {
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(5);
        let mut world = build_world(&config, &mut rng);
        let (tx, rx) = unbounded();

        assert!(apply_command(&mut world, SimCommand::AcknowledgeStart, &tx));
        assert!(world.resource::<Lifecycle>().is_playing());
        assert_eq!(
            rx.try_recv().unwrap(),
            SimEvent::LifecycleChanged(LifecycleStates::Playing)
        );

        // second acknowledge is ignored: no setter call, no event
        apply_command(&mut world, SimCommand::AcknowledgeStart, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_toggle_cycles_playing_and_paused() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let (tx, rx) = unbounded();

        apply_command(&mut world, SimCommand::TogglePauseResume, &tx);
        assert_eq!(world.resource::<Lifecycle>().get(), LifecycleStates::Paused);
        apply_command(&mut world, SimCommand::TogglePauseResume, &tx);
        assert_eq!(world.resource::<Lifecycle>().get(), LifecycleStates::Playing);

        let events: Vec<SimEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SimEvent::LifecycleChanged(LifecycleStates::Paused),
                SimEvent::LifecycleChanged(LifecycleStates::Playing),
            ]
        );
    }

    #[test]
    fn test_toggle_in_start_is_noop() {
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(5);
        let mut world = build_world(&config, &mut rng);
        let (tx, rx) = unbounded();

        apply_command(&mut world, SimCommand::TogglePauseResume, &tx);
        assert_eq!(world.resource::<Lifecycle>().get(), LifecycleStates::Start);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_launch_emits_fuel_then_log() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let (tx, rx) = unbounded();

        apply_command(&mut world, SimCommand::RequestLaunch, &tx);
        let events: Vec<SimEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SimEvent::FuelChanged(90));
        assert_eq!(
            events[1],
            SimEvent::LogMessage("Launching ship! Fuel remaining: 90%".to_string())
        );
    }

    #[test]
    fn test_launch_with_empty_tank_only_logs() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let (tx, rx) = unbounded();

        for _ in 0..10 {
            apply_command(&mut world, SimCommand::RequestLaunch, &tx);
        }
        rx.try_iter().for_each(drop);

        apply_command(&mut world, SimCommand::RequestLaunch, &tx);
        let events: Vec<SimEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![SimEvent::LogMessage("Not enough fuel to launch!".to_string())]
        );
        assert_eq!(world.resource::<FuelTank>().percent(), 0);
    }

    #[test]
    fn test_negative_time_scale_rejected_without_mutation() {
        let config = SimConfig::new();
        let mut world = playing_world(&config);
        let (tx, _rx) = unbounded();

        apply_command(&mut world, SimCommand::SetTimeScale(-2.0), &tx);
        assert_eq!(world.resource::<WorldTime>().time_scale(), 1.0);
    }

    #[test]
    fn test_stop_halts_the_loop() {
        let config = SimConfig::new();
        let mut rng = Rng::with_seed(5);
        let mut world = build_world(&config, &mut rng);
        let (tx, _rx) = unbounded();
        assert!(!apply_command(&mut world, SimCommand::Stop, &tx));
    }
}
