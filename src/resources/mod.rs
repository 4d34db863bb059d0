//! ECS resources made available to systems.
//!
//! This module groups the long-lived data backing one simulation session:
//! the resources injected into the world and accessed by systems and the
//! command handler, plus the configuration they are built from.
//!
//! Overview
//! - `fuel` – ship fuel tank consumed by launch requests
//! - `idregistry` – process-lifetime unique asteroid id issuance
//! - `lifecycle` – authoritative Start/Playing/Paused state gating advancement
//! - `simconfig` – tick rate, population size, and spawn ranges from config.ini
//! - `worldtime` – simulation time, delta, and time scale

pub mod fuel;
pub mod idregistry;
pub mod lifecycle;
pub mod simconfig;
pub mod worldtime;
