//! Simulation configuration.
//!
//! Manages simulation settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scheduler]
//! target_tps = 60
//!
//! [world]
//! asteroid_count = 5
//!
//! [spawn]
//! pos_min = -100.0
//! pos_max = 100.0
//! vel_min = -10.0
//! vel_max = 10.0
//! mass_min = 100.0
//! mass_max = 1000.0
//! purity_min = 0.1
//! purity_max = 1.0
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::SimError;

/// Default safe values for startup
const DEFAULT_TARGET_TPS: u32 = 60;
const DEFAULT_ASTEROID_COUNT: u32 = 5;
const DEFAULT_POS_MIN: f64 = -100.0;
const DEFAULT_POS_MAX: f64 = 100.0;
const DEFAULT_VEL_MIN: f64 = -10.0;
const DEFAULT_VEL_MAX: f64 = 10.0;
const DEFAULT_MASS_MIN: f64 = 100.0;
const DEFAULT_MASS_MAX: f64 = 1000.0;
const DEFAULT_PURITY_MIN: f64 = 0.1;
const DEFAULT_PURITY_MAX: f64 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration.
///
/// Stores the scheduler tick rate, the asteroid population size, and the
/// inclusive ranges asteroid attributes are sampled from at world
/// initialization. Missing file or missing keys fall back to defaults.
/// Passed by reference into world construction and by value into the
/// scheduler thread; it is not world state itself.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Target scheduler ticks per second.
    pub target_tps: u32,
    /// Number of asteroids spawned at world initialization.
    pub asteroid_count: u32,
    /// Position sample range, applied per axis.
    pub pos_min: f64,
    pub pos_max: f64,
    /// Velocity sample range, applied per axis.
    pub vel_min: f64,
    pub vel_max: f64,
    /// Raw mass sample range.
    pub mass_min: f64,
    pub mass_max: f64,
    /// Purity sample range, kept within (0, 1].
    pub purity_min: f64,
    pub purity_max: f64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            target_tps: DEFAULT_TARGET_TPS,
            asteroid_count: DEFAULT_ASTEROID_COUNT,
            pos_min: DEFAULT_POS_MIN,
            pos_max: DEFAULT_POS_MAX,
            vel_min: DEFAULT_VEL_MIN,
            vel_max: DEFAULT_VEL_MAX,
            mass_min: DEFAULT_MASS_MIN,
            mass_max: DEFAULT_MASS_MAX,
            purity_min: DEFAULT_PURITY_MIN,
            purity_max: DEFAULT_PURITY_MAX,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Nominal tick duration in seconds, `1 / target_tps`.
    pub fn nominal_dt(&self) -> f64 {
        1.0 / self.target_tps as f64
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), SimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to load config file: {e}")))?;

        // [scheduler] section
        if let Some(tps) = config.getuint("scheduler", "target_tps").ok().flatten() {
            self.target_tps = tps as u32;
        }

        // [world] section
        if let Some(count) = config.getuint("world", "asteroid_count").ok().flatten() {
            self.asteroid_count = count as u32;
        }

        // [spawn] section
        if let Some(v) = config.getfloat("spawn", "pos_min").ok().flatten() {
            self.pos_min = v;
        }
        if let Some(v) = config.getfloat("spawn", "pos_max").ok().flatten() {
            self.pos_max = v;
        }
        if let Some(v) = config.getfloat("spawn", "vel_min").ok().flatten() {
            self.vel_min = v;
        }
        if let Some(v) = config.getfloat("spawn", "vel_max").ok().flatten() {
            self.vel_max = v;
        }
        if let Some(v) = config.getfloat("spawn", "mass_min").ok().flatten() {
            self.mass_min = v;
        }
        if let Some(v) = config.getfloat("spawn", "mass_max").ok().flatten() {
            self.mass_max = v;
        }
        if let Some(v) = config.getfloat("spawn", "purity_min").ok().flatten() {
            self.purity_min = v;
        }
        if let Some(v) = config.getfloat("spawn", "purity_max").ok().flatten() {
            self.purity_max = v;
        }

        info!(
            "Loaded config: tps={}, asteroids={}, pos=[{}, {}], vel=[{}, {}], mass=[{}, {}], purity=[{}, {}]",
            self.target_tps,
            self.asteroid_count,
            self.pos_min,
            self.pos_max,
            self.vel_min,
            self.vel_max,
            self.mass_min,
            self.mass_max,
            self.purity_min,
            self.purity_max
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SimError> {
        let mut config = Ini::new();

        config.set(
            "scheduler",
            "target_tps",
            Some(self.target_tps.to_string()),
        );
        config.set(
            "world",
            "asteroid_count",
            Some(self.asteroid_count.to_string()),
        );
        config.set("spawn", "pos_min", Some(self.pos_min.to_string()));
        config.set("spawn", "pos_max", Some(self.pos_max.to_string()));
        config.set("spawn", "vel_min", Some(self.vel_min.to_string()));
        config.set("spawn", "vel_max", Some(self.vel_max.to_string()));
        config.set("spawn", "mass_min", Some(self.mass_min.to_string()));
        config.set("spawn", "mass_max", Some(self.mass_max.to_string()));
        config.set("spawn", "purity_min", Some(self.purity_min.to_string()));
        config.set("spawn", "purity_max", Some(self.purity_max.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| SimError::Config(format!("failed to save config file: {e}")))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
