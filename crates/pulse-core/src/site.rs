//! The `Site` facade: settings, live resolver, and the publish promotion.

use pulse_config::{Draft, Language, Page, Resolver, Settings};
use pulse_store::BlobStore;

use crate::error::Result;
use crate::loader::{ConfigSource, load_config};
use crate::publish::{PublishReceipt, publish_config};

/// The running application's content state.
///
/// Owns the operator settings and the live resolver. The live
/// configuration changes at exactly two points — initial load and
/// successful publish — and both replace it wholesale.
pub struct Site {
    settings: Settings,
    resolver: Resolver,
    source: ConfigSource,
}

impl Site {
    /// Load the site: remote config when a store is supplied, bundled
    /// defaults otherwise. Font variables are derived as part of resolver
    /// construction, so typography reflects the loaded config immediately.
    pub fn load(settings: Settings, store: Option<&dyn BlobStore>) -> Self {
        let (config, source) = load_config(store);
        Self {
            settings,
            resolver: Resolver::new(config),
            source,
        }
    }

    /// Effective display string for `(page, field)` with a compiled
    /// fallback.
    pub fn resolve<'a>(&'a self, page: Page, field: &str, fallback: &'a str) -> &'a str {
        self.resolver.resolve(page, field, fallback)
    }

    /// The active display language.
    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Operator settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The live resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Where the current live configuration came from.
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Open a draft over the live configuration.
    pub fn begin_draft(&self) -> Draft {
        self.resolver.begin_draft()
    }

    /// Publish a draft and, on success, promote it to live.
    ///
    /// Runs the two-step transaction against the store. Only a fully
    /// successful commit swaps the live configuration (and its font
    /// variables); on any failure the live state is untouched. There is no
    /// automatic retry — the operator republishes from their persisted
    /// draft.
    pub fn publish(&mut self, store: &dyn BlobStore, draft: Draft) -> Result<PublishReceipt> {
        let config = draft.into_config();
        let receipt = publish_config(store, &config)?;
        self.resolver.install(config);
        self.source = ConfigSource::Remote;
        Ok(receipt)
    }
}
