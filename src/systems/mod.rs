//! Simulation systems.
//!
//! This module groups the ECS systems and exclusive-world functions that
//! advance the simulation.
//!
//! Submodules overview
//! - [`movement`] – integrate positions from velocities and the tick delta
//! - [`snapshot`] – extract defensive copies of asteroid state for events
//! - [`spawn`] – populate the world with randomized asteroids
//! - [`time`] – accumulate scaled elapsed time and set the tick delta

pub mod movement;
pub mod snapshot;
pub mod spawn;
pub mod time;
