//! Configuration error type.
//!
//! Every variant is raised synchronously during validation, before any
//! simulation state exists — a bad layout never produces a partially built
//! replica.

use thiserror::Error;

/// A layout or run configuration that cannot be simulated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("gate offset must be negative, behind row 1 (got {0})")]
    GateOffset(f64),

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },

    #[error("seat encoding supports at most 9 columns (got {0})")]
    TooManyColumns(u32),

    #[error("seat-swap rules assume exactly 6 columns (got {0})")]
    SwapNeedsSixColumns(u32),

    #[error("half-row layouts assume exactly 6 columns (got {0})")]
    HalfRowNeedsSixColumns(u32),

    #[error("at least 2 replicas are needed for a sample variance (got {0})")]
    TooFewReplicas(u32),
}

/// Shorthand result type for validation paths.
pub type ConfigResult<T> = Result<T, ConfigError>;
