//! Error types for pulse-core

/// Result type for pulse-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pulse-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration model error from pulse-config
    #[error(transparent)]
    Config(#[from] pulse_config::Error),

    /// Blob-store error from pulse-store
    #[error(transparent)]
    Store(#[from] pulse_store::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this failure is a lost publish race (stale version).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Store(pulse_store::Error::Conflict { .. }))
    }
}
