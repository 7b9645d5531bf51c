//! Versioned blob-store access for the MedPulse site configuration.
//!
//! The published configuration lives as a single JSON file in a
//! version-controlled hosting service. This crate treats that service as an
//! opaque versioned key-value store behind the [`BlobStore`] trait: read
//! the raw content, read the current version identifier, and write new
//! content conditioned on the expected version (compare-and-swap).
//!
//! [`GitHubStore`] is the production backend; [`MemoryStore`] backs tests.

pub mod error;
pub mod github;
pub mod memory;
pub mod store;

pub use error::{Error, Result};
pub use github::GitHubStore;
pub use memory::MemoryStore;
pub use store::{BlobMeta, BlobStore};
