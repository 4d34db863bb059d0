//! Space simulation core library.
//!
//! This module exposes the simulation's ECS components, resources, systems,
//! events, and the scheduler thread for use by frontends and integration
//! tests.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod sim;
pub mod systems;
