//! Command and event types exchanged across the simulation thread boundary.
//!
//! The presentation side never touches the world directly; it sends
//! [`SimCommand`](sim::SimCommand) values in and receives
//! [`SimEvent`](sim::SimEvent) values out, each event carrying an owned copy
//! of the relevant data.
//!
//! Submodules:
//! - [`sim`] – commands accepted by the scheduler thread and events it emits

pub mod sim;
