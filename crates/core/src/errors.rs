//! Error types for review-me
//!
//! Initialization failures (host too old, runtime too old, missing notice
//! handler) are never returned to the embedder as `Err`; the gate renders
//! them inline instead. The remaining variants cover configuration parsing
//! and storage.

use thiserror::Error;

/// Result type alias for review-me operations
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Main error type for review-me
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Host platform is older than the minimum supported version
    #[error("Host version {found} is older than required {required}")]
    HostVersionTooOld { required: String, found: String },

    /// Runtime is older than the minimum supported version
    #[error("Runtime version {found} is older than required {required}")]
    RuntimeVersionTooOld { required: String, found: String },

    /// No notice registrar was provided by the host
    #[error("Notice registration handler is missing")]
    DependencyMissing,

    /// Invalid configuration map
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Option store error
    #[error("Storage error: {0}")]
    StorageError(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error (catch-all)
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        ReviewError::Other(err.to_string())
    }
}

impl From<String> for ReviewError {
    fn from(err: String) -> Self {
        ReviewError::Other(err)
    }
}

impl From<&str> for ReviewError {
    fn from(err: &str) -> Self {
        ReviewError::Other(err.to_string())
    }
}

impl ReviewError {
    /// Get user-friendly error message for inline display in the dashboard
    pub fn user_message(&self) -> String {
        match self {
            ReviewError::HostVersionTooOld { required, .. } => {
                format!(
                    "The library can not be used because your version of the host platform is too old. You need version {} at least.",
                    required
                )
            },
            ReviewError::RuntimeVersionTooOld { required, .. } => {
                format!(
                    "The library can not be used because your version of the runtime is too old. You need version {} at least.",
                    required
                )
            },
            ReviewError::DependencyMissing => {
                "Dependencies are missing. Please provide a <code>NoticeRegistrar</code> when setting up the gate."
                    .to_string()
            },
            _ => self.to_string(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ReviewError::HostVersionTooOld { .. } => "host_version",
            ReviewError::RuntimeVersionTooOld { .. } => "runtime_version",
            ReviewError::DependencyMissing => "dependency",
            ReviewError::InvalidConfig(_) => "config",
            ReviewError::SerdeError(_) => "serialization",
            ReviewError::StorageError(_) => "storage",
            ReviewError::IoError(_) => "io",
            ReviewError::Other(_) => "other",
        }
    }

    /// Whether this error comes from the initialization checks
    pub fn is_init_failure(&self) -> bool {
        matches!(
            self,
            ReviewError::HostVersionTooOld { .. }
                | ReviewError::RuntimeVersionTooOld { .. }
                | ReviewError::DependencyMissing
        )
    }
}
