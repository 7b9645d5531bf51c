//! The publish transaction.

use chrono::{DateTime, SecondsFormat, Utc};
use pulse_config::SiteConfig;
use pulse_store::BlobStore;

use crate::error::Result;

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Version identifier of the committed blob.
    pub sha: String,
    /// When the commit was made.
    pub published_at: DateTime<Utc>,
    /// The commit message that was recorded.
    pub message: String,
}

/// Commit message carrying the publish timestamp. Audit trail only —
/// nothing parses it back.
fn commit_message(now: DateTime<Utc>) -> String {
    format!(
        "Update site config: {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Commit `content` against an explicit expected version.
///
/// This is the compare-and-swap half of the transaction: the store rejects
/// the write atomically when `expected_sha` is stale, surfacing the race
/// as [`Conflict`]. No local state changes on failure and no retry is
/// attempted — the operator retries manually.
///
/// [`Conflict`]: pulse_store::Error::Conflict
pub fn publish_with_version(
    store: &dyn BlobStore,
    content: &str,
    expected_sha: &str,
) -> Result<PublishReceipt> {
    let now = Utc::now();
    let message = commit_message(now);
    let sha = store.put(content, expected_sha, &message)?;
    tracing::info!(%sha, "Published site configuration");
    Ok(PublishReceipt {
        sha,
        published_at: now,
        message,
    })
}

/// Run the full two-step publish transaction for a configuration.
///
/// Step 1 reads the blob's current version; a missing blob is fatal
/// ([`NotFound`]) and step 2 never executes. Step 2 commits the
/// pretty-printed JSON conditioned on that version. The two steps form one
/// logical transaction: any failure leaves the store and the caller's
/// state untouched.
///
/// [`NotFound`]: pulse_store::Error::NotFound
pub fn publish_config(store: &dyn BlobStore, config: &SiteConfig) -> Result<PublishReceipt> {
    let meta = store.metadata()?;
    let content = config.to_pretty_json()?;
    publish_with_version(store, &content, &meta.sha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pulse_config::Page;
    use pulse_store::{Error as StoreError, MemoryStore};

    #[test]
    fn commit_message_embeds_the_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let message = commit_message(now);
        assert_eq!(message, "Update site config: 2026-03-14T09:26:53.000Z");
    }

    #[test]
    fn publish_commits_pretty_json() {
        let store = MemoryStore::with_content("{}");
        let mut config = SiteConfig::default();
        config.page_mut(Page::Home).set("hero_title_en", "Hello");

        let receipt = publish_config(&store, &config).unwrap();

        let stored = store.content().unwrap();
        assert_eq!(stored, config.to_pretty_json().unwrap());
        assert_eq!(store.metadata().unwrap().sha, receipt.sha);
    }

    #[test]
    fn missing_blob_aborts_before_any_write() {
        let store = MemoryStore::empty();
        let err = publish_config(&store, &SiteConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Store(StoreError::NotFound { .. })
        ));
        assert_eq!(store.put_attempts(), 0);
    }

    #[test]
    fn stale_version_surfaces_as_conflict() {
        let store = MemoryStore::with_content("{}");
        let stale = store.metadata().unwrap().sha;
        store.put("winner", &stale, "first").unwrap();

        let err = publish_with_version(&store, "loser", &stale).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.content().unwrap(), "winner");
    }
}
