//! Error types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max rounds must be between 1 and {max}, got {got}")]
    InvalidMaxRounds { got: u32, max: u32 },
    #[error("cadence must be at least one time unit")]
    InvalidCadence,
    #[error("time unit must be at least one millisecond")]
    InvalidUnit,
    #[error("{cadence} time units of {unit_ms}ms is too long between rounds")]
    RoundPeriodOverflow { cadence: u32, unit_ms: u64 },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reasons the geolocation collaborator could not produce a fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location services are disabled")]
    Disabled,
    #[error("failed to get location: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no players assigned")]
    NoPlayers,
}
