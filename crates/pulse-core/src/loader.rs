//! Startup configuration loading.

use pulse_config::{SiteConfig, defaults};
use pulse_store::BlobStore;

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Fetched from the remote blob store.
    Remote,
    /// The bundled default asset (no credentials, or the fetch failed).
    Bundled,
}

impl ConfigSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigSource::Remote => "remote",
            ConfigSource::Bundled => "bundled",
        }
    }
}

/// Load the effective site configuration.
///
/// With `None` (owner/repo not configured) the bundled default is used and
/// no store call is made. With a store, a raw fetch is attempted once; any
/// failure — transport, non-success status, or invalid JSON — degrades to
/// the bundled default with a warning. This function never errors: a
/// broken or unreachable blob must not block rendering.
pub fn load_config(store: Option<&dyn BlobStore>) -> (SiteConfig, ConfigSource) {
    let Some(store) = store else {
        tracing::debug!("No blob-store credentials configured, using bundled config");
        return (defaults::bundled(), ConfigSource::Bundled);
    };

    match store.fetch_raw() {
        Ok(raw) => match SiteConfig::from_json(&raw) {
            Ok(config) => {
                tracing::info!("Loaded site configuration from remote store");
                (config, ConfigSource::Remote)
            }
            Err(e) => {
                tracing::warn!("Remote configuration is not valid JSON ({e}), using bundled config");
                (defaults::bundled(), ConfigSource::Bundled)
            }
        },
        Err(e) => {
            tracing::warn!("Remote configuration fetch failed ({e}), using bundled config");
            (defaults::bundled(), ConfigSource::Bundled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_config::Page;
    use pulse_store::MemoryStore;

    #[test]
    fn no_store_means_bundled_without_any_call() {
        let (config, source) = load_config(None);
        assert_eq!(source, ConfigSource::Bundled);
        assert_eq!(config, defaults::bundled());
    }

    #[test]
    fn remote_content_wins_when_fetch_succeeds() {
        let store = MemoryStore::with_content(r#"{"home": {"hero_title_en": "Remote"}}"#);
        let (config, source) = load_config(Some(&store));
        assert_eq!(source, ConfigSource::Remote);
        assert_eq!(config.field(Page::Home, "hero_title_en"), Some("Remote"));
    }

    #[test]
    fn fetch_failure_degrades_to_bundled() {
        let store = MemoryStore::empty();
        let (config, source) = load_config(Some(&store));
        assert_eq!(source, ConfigSource::Bundled);
        assert_eq!(config, defaults::bundled());
    }

    #[test]
    fn invalid_json_degrades_to_bundled() {
        let store = MemoryStore::with_content("{definitely not json");
        let (config, source) = load_config(Some(&store));
        assert_eq!(source, ConfigSource::Bundled);
        assert_eq!(config, defaults::bundled());
    }

    #[test]
    fn valid_but_misshapen_json_is_still_remote() {
        // Shape errors degrade field-by-field inside the model, not to the
        // bundled file; only unfetchable or syntactically invalid content
        // falls back wholesale.
        let store = MemoryStore::with_content(r#"{"unexpected": true}"#);
        let (config, source) = load_config(Some(&store));
        assert_eq!(source, ConfigSource::Remote);
        assert!(config.home.is_empty());
    }
}
