//! Error types for pulse-config

use std::path::PathBuf;

/// Result type for pulse-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pulse-config operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown page name
    #[error("Unknown page: {name}")]
    UnknownPage { name: String },

    /// Unknown language tag
    #[error("Unknown language: {tag}")]
    UnknownLanguage { tag: String },

    /// No platform configuration directory could be determined
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    /// Failed to acquire the advisory lock during an atomic write
    #[error("Failed to lock {path} for writing")]
    LockFailed { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
