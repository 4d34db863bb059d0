//! Scheduler thread and presentation-side handle.
//!
//! The simulation runs on a dedicated OS thread that exclusively owns the
//! ECS world; the presentation side never mutates state directly. The two
//! sides communicate over lock-free channels:
//! - [`scheduler::sim_thread`] runs the fixed-timestep loop, drains
//!   [`SimCommand`](crate::events::sim::SimCommand) messages, and emits
//!   [`SimEvent`](crate::events::sim::SimEvent) messages.
//! - [`handle::SimHandle`] spawns the thread, validates and forwards
//!   commands, exposes the event receiver, and joins the thread on stop.

pub mod handle;
pub mod scheduler;
