//! In-process blob store for tests and local development.

use std::sync::Mutex;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::store::{BlobMeta, BlobStore};

/// Canonical content version for the in-memory store: `sha256:<hex>`.
pub fn content_version(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

#[derive(Debug, Clone)]
struct Blob {
    content: String,
    sha: String,
}

/// A single-blob store held in memory, with the same compare-and-swap
/// contract as the production backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<Blob>>,
    put_count: Mutex<usize>,
}

impl MemoryStore {
    /// Empty store: `fetch_raw` and `metadata` report the blob missing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store seeded with initial content.
    pub fn with_content(content: impl Into<String>) -> Self {
        let store = Self::default();
        store.seed(content);
        store
    }

    /// Replace the stored blob directly, bypassing the CAS (test setup).
    pub fn seed(&self, content: impl Into<String>) {
        let content = content.into();
        let sha = content_version(&content);
        *self.blob.lock().unwrap() = Some(Blob { content, sha });
    }

    /// Current stored content, if any.
    pub fn content(&self) -> Option<String> {
        self.blob.lock().unwrap().as_ref().map(|b| b.content.clone())
    }

    /// Number of `put` calls attempted, successful or not.
    pub fn put_attempts(&self) -> usize {
        *self.put_count.lock().unwrap()
    }
}

impl BlobStore for MemoryStore {
    fn fetch_raw(&self) -> Result<String> {
        self.blob
            .lock()
            .unwrap()
            .as_ref()
            .map(|b| b.content.clone())
            .ok_or_else(|| Error::NotFound {
                path: "memory".to_string(),
            })
    }

    fn metadata(&self) -> Result<BlobMeta> {
        self.blob
            .lock()
            .unwrap()
            .as_ref()
            .map(|b| BlobMeta { sha: b.sha.clone() })
            .ok_or_else(|| Error::NotFound {
                path: "memory".to_string(),
            })
    }

    fn put(&self, content: &str, expected_sha: &str, _message: &str) -> Result<String> {
        *self.put_count.lock().unwrap() += 1;

        let mut guard = self.blob.lock().unwrap();
        let current = guard.as_ref().ok_or_else(|| Error::NotFound {
            path: "memory".to_string(),
        })?;
        if current.sha != expected_sha {
            return Err(Error::Conflict {
                expected: expected_sha.to_string(),
            });
        }
        let sha = content_version(content);
        *guard = Some(Blob {
            content: content.to_string(),
            sha: sha.clone(),
        });
        Ok(sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_reports_not_found() {
        let store = MemoryStore::empty();
        assert!(matches!(store.fetch_raw(), Err(Error::NotFound { .. })));
        assert!(matches!(store.metadata(), Err(Error::NotFound { .. })));
    }

    #[test]
    fn put_with_current_sha_succeeds() {
        let store = MemoryStore::with_content("{}");
        let meta = store.metadata().unwrap();
        let new_sha = store.put("{\"a\":1}", &meta.sha, "update").unwrap();

        assert_eq!(store.fetch_raw().unwrap(), "{\"a\":1}");
        assert_eq!(store.metadata().unwrap().sha, new_sha);
        assert_ne!(new_sha, meta.sha);
    }

    #[test]
    fn put_with_stale_sha_is_rejected_atomically() {
        let store = MemoryStore::with_content("{}");
        let stale = store.metadata().unwrap().sha;
        store.put("first", &stale, "m").unwrap();

        let err = store.put("second", &stale, "m").unwrap_err();
        assert!(matches!(err, Error::Conflict { .. }));
        assert_eq!(store.content().unwrap(), "first");
    }

    #[test]
    fn version_is_deterministic_per_content() {
        assert_eq!(content_version("abc"), content_version("abc"));
        assert_ne!(content_version("abc"), content_version("abd"));
        assert!(content_version("abc").starts_with("sha256:"));
    }
}
