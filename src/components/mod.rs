//! ECS components for simulated entities.
//!
//! This module groups all component types attached to entities in the
//! simulation world. An asteroid is an ECS entity carrying all three.
//!
//! Submodules overview:
//! - [`asteroid`] – asteroid identity, raw mass, purity, and the mining operation
//! - [`position`] – world-space position of an entity
//! - [`velocity`] – constant linear velocity integrated by the movement system

pub mod asteroid;
pub mod position;
pub mod velocity;
