//! Thin client for the MedPulse REST API.
//!
//! The remote API is a collaborator, not part of this system: this crate
//! only provides the generic list/get/create/update/delete contract per
//! resource, bearer-token auth, and the API's error-message convention. It
//! imposes no ordering or transactional guarantees of its own — responses
//! are passed through as JSON values.

pub mod client;
pub mod error;
pub mod resource;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use resource::Resource;
