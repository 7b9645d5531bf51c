//! Error types for pulse-api

/// Result type for pulse-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pulse-api operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-success response from the API. The message is the server's
    /// `message` field when the error body is JSON, else the raw body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network/transport failure before any HTTP status was received.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The resource does not support this operation (the API's routes are
    /// not uniform; e.g. permissions are list-only).
    #[error("{resource} does not support {operation}")]
    Unsupported {
        resource: &'static str,
        operation: &'static str,
    },

    /// Not a known API resource name.
    #[error("Unknown resource: {name}")]
    UnknownResource { name: String },

    /// Standard I/O error while reading a response body.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
