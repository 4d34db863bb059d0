//! Error types for the simulation core.

use thiserror::Error;

/// Errors produced by simulation operations.
///
/// Validation failures are returned synchronously by the offending operation
/// before any state is mutated; the tick loop itself never produces errors
/// because it only calls into the world with values it controls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A caller passed a value outside the operation's domain (negative time
    /// delta, negative mine amount, negative time scale).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A launch was requested with the fuel tank empty. This is a defined
    /// outcome, not a fault; fuel is left untouched.
    #[error("not enough fuel to launch")]
    InsufficientFuel,

    /// The configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}
