//! Load and publish orchestration for the MedPulse content core.
//!
//! This crate sits above the model (`pulse-config`) and the blob store
//! (`pulse-store`):
//!
//! ```text
//!          CLI
//!           |
//!       pulse-core
//!        /      \
//! pulse-config  pulse-store
//! ```
//!
//! It implements the two state transitions the live configuration ever
//! goes through:
//!
//! - **load** — remote fetch with wholesale fallback to the bundled
//!   default; total, never an error.
//! - **publish** — the two-step read-version-then-commit transaction; the
//!   live configuration is promoted only after the store accepts the
//!   write.

pub mod error;
pub mod loader;
pub mod publish;
pub mod site;

pub use error::{Error, Result};
pub use loader::{ConfigSource, load_config};
pub use publish::{PublishReceipt, publish_config, publish_with_version};
pub use site::Site;
