//! Shared test fixtures for the MedPulse content workspace.
//!
//! Dev-dependency only — never published. Provides a realistic bilingual
//! sample configuration, stores pre-seeded with it, and a store that fails
//! on demand for atomicity tests.

use serde_json::json;

use pulse_config::SiteConfig;
use pulse_store::{BlobMeta, BlobStore, Error, MemoryStore, Result};

/// A small but realistic bilingual configuration.
pub fn sample_config() -> SiteConfig {
    SiteConfig::from_value(&json!({
        "fonts": {
            "ar": { "headings": "Cairo", "body": "Tajawal" },
            "en": { "headings": "Inter", "body": "Inter" },
        },
        "home": {
            "hero_title_ar": "ميدبالس",
            "hero_title_en": "MedPulse",
            "hero_subtitle_ar": "منصة تقييم المؤتمرات الطبية",
            "hero_subtitle_en": "The Medical Conference Evaluation Platform",
        },
        "about": {
            "h1_ar": "عن ميدبالس",
            "h1_en": "About MedPulse",
        },
        "contact": {
            "email_label_ar": "البريد الإلكتروني",
            "email_label_en": "Email",
            "email_val": "info@medpulse.example",
        },
    }))
}

/// A memory store seeded with the pretty JSON of `config`.
pub fn seeded_store(config: &SiteConfig) -> MemoryStore {
    MemoryStore::with_content(
        config
            .to_pretty_json()
            .expect("sample config always serializes"),
    )
}

/// A memory store seeded with [`sample_config`].
pub fn sample_store() -> MemoryStore {
    seeded_store(&sample_config())
}

/// Which store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// `fetch_raw` returns HTTP 500; everything else works.
    Fetch,
    /// `metadata` returns HTTP 500, so a publish aborts before writing.
    Metadata,
    /// `put` returns HTTP 500 after the metadata read succeeded.
    Put,
}

/// A store wrapper that fails one operation with a server error while
/// delegating the rest to an inner [`MemoryStore`].
pub struct FailingStore {
    inner: MemoryStore,
    mode: FailureMode,
}

impl FailingStore {
    pub fn new(inner: MemoryStore, mode: FailureMode) -> Self {
        Self { inner, mode }
    }

    /// The wrapped store, for post-failure assertions.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn server_error() -> Error {
        Error::Http {
            status: 500,
            message: "injected failure".to_string(),
        }
    }
}

impl BlobStore for FailingStore {
    fn fetch_raw(&self) -> Result<String> {
        if self.mode == FailureMode::Fetch {
            return Err(Self::server_error());
        }
        self.inner.fetch_raw()
    }

    fn metadata(&self) -> Result<BlobMeta> {
        if self.mode == FailureMode::Metadata {
            return Err(Self::server_error());
        }
        self.inner.metadata()
    }

    fn put(&self, content: &str, expected_sha: &str, message: &str) -> Result<String> {
        if self.mode == FailureMode::Put {
            return Err(Self::server_error());
        }
        self.inner.put(content, expected_sha, message)
    }
}
