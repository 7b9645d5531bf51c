//! The blob-store trait.

use crate::Result;

/// Version metadata for the stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobMeta {
    /// Opaque content version identifier (the CAS token). For the GitHub
    /// backend this is the file's git blob sha.
    pub sha: String,
}

/// A versioned single-blob store.
///
/// Implementations hold the blob coordinates (repository, branch, path);
/// callers only see content strings and version identifiers. The
/// `expected_sha` passed to [`put`] is the optimistic-concurrency token:
/// the store must reject the write atomically when it is stale.
///
/// [`put`]: BlobStore::put
pub trait BlobStore {
    /// Fetch the current raw blob content from the published branch.
    ///
    /// Used by the startup load; requires no credentials.
    fn fetch_raw(&self) -> Result<String>;

    /// Read the blob's current version metadata.
    ///
    /// Returns [`Error::NotFound`] when the blob does not exist —
    /// publishing has nothing to version against and must abort.
    ///
    /// [`Error::NotFound`]: crate::Error::NotFound
    fn metadata(&self) -> Result<BlobMeta>;

    /// Commit new content, conditioned on `expected_sha`.
    ///
    /// Returns the new version identifier. A stale `expected_sha` fails
    /// with [`Error::Conflict`]; no part of the write is applied.
    ///
    /// [`Error::Conflict`]: crate::Error::Conflict
    fn put(&self, content: &str, expected_sha: &str, message: &str) -> Result<String>;
}
