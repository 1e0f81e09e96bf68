//! Error types for the collaborator boundaries
//!
//! Nothing here ever reaches the simulation tick: the driver logs and
//! discards persistence failures, and configuration errors fall back to
//! default tuning at startup.

/// Failure reading or writing the best score
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// No storage backend is reachable (no window, storage disabled, ...)
    #[error("storage backend unavailable")]
    Unavailable,
    /// A stored value exists but does not parse as a score
    #[error("stored best score {0:?} is not a valid score")]
    Malformed(String),
    /// Backend refused the read
    #[error("storage read failed: {0}")]
    Read(String),
    /// Backend refused the write
    #[error("storage write failed: {0}")]
    Write(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Rejected game tuning
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid tuning value for `{field}`: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
}
