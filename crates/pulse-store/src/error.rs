//! Error types for pulse-store

/// Result type for pulse-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pulse-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration blob does not exist in the target repository.
    /// Fatal to a publish — there is nothing to version against.
    #[error("Blob not found: {path}")]
    NotFound { path: String },

    /// The expected version no longer matches: another publish won the
    /// race. The store rejected the write atomically; retry manually.
    #[error("Version conflict: expected {expected}")]
    Conflict { expected: String },

    /// Non-success HTTP status from the store.
    #[error("Store returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Network/transport failure before any HTTP status was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered success but the body lacked the expected fields.
    #[error("Unexpected store response: {message}")]
    UnexpectedResponse { message: String },

    /// Owner or repository name fails the hosting service's naming rules.
    #[error("Invalid repository coordinate: {name}")]
    InvalidCoordinate { name: String },

    /// JSON error while reading a store response.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error while reading a response body.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
