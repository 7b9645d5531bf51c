//! Error types for pulse-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pulse-core
    #[error(transparent)]
    Core(#[from] pulse_core::Error),

    /// Error from pulse-config
    #[error(transparent)]
    Config(#[from] pulse_config::Error),

    /// Error from pulse-store
    #[error(transparent)]
    Store(#[from] pulse_store::Error),

    /// Error from pulse-api
    #[error(transparent)]
    Api(#[from] pulse_api::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
