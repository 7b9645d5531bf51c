//! Shared command context: settings store, remote store, draft file.

use std::fs;
use std::path::PathBuf;

use pulse_config::settings::SettingsStore;
use pulse_config::{Draft, Settings, SiteConfig, io};
use pulse_core::{ConfigSource, load_config};
use pulse_store::{BlobStore, GitHubStore};

use crate::error::{CliError, Result};

/// Everything a command needs to reach persisted state.
pub struct Context {
    store: SettingsStore,
}

impl Context {
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        let store = match config_dir {
            Some(dir) => SettingsStore::with_dir(dir),
            None => SettingsStore::new(),
        };
        Self { store }
    }

    pub fn settings_store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(self.store.load()?)
    }

    /// Read-only remote store when owner/repo are configured.
    ///
    /// Raw config fetches are unauthenticated, so no token is attached.
    pub fn fetch_store(&self, settings: &Settings) -> Result<Option<GitHubStore>> {
        match settings.fetch_source() {
            Some((owner, repo)) => Ok(Some(GitHubStore::new(owner, repo, None)?)),
            None => Ok(None),
        }
    }

    /// Authenticated store for publishing; errors when credentials are
    /// incomplete.
    pub fn publish_store(&self, settings: &Settings) -> Result<GitHubStore> {
        let target = settings.publish_target().ok_or_else(|| {
            CliError::user(
                "Publishing requires owner, repo, and token; set them with `medpulse settings set`",
            )
        })?;
        Ok(GitHubStore::new(
            target.owner,
            target.repo,
            Some(target.token),
        )?)
    }

    /// Load the live configuration per the settings.
    pub fn load_live(&self, settings: &Settings) -> Result<(SiteConfig, ConfigSource)> {
        let store = self.fetch_store(settings)?;
        Ok(load_config(store.as_ref().map(|s| s as &dyn BlobStore)))
    }

    /// Load the working draft: the draft file when one exists, otherwise a
    /// fresh copy of `live`.
    pub fn load_draft(&self, live: &SiteConfig) -> Result<Draft> {
        let path = self.store.draft_path()?;
        if !path.is_file() {
            return Ok(Draft::new(live));
        }
        let content = fs::read_to_string(&path)?;
        let config = SiteConfig::from_json(&content)
            .map_err(|e| CliError::user(format!("Draft file is not valid JSON: {e}")))?;
        Ok(Draft::from_config(config))
    }

    /// Persist the working draft atomically.
    pub fn save_draft(&self, draft: &Draft) -> Result<()> {
        let path = self.store.draft_path()?;
        let content = draft
            .config()
            .to_pretty_json()
            .map_err(pulse_config::Error::from)?;
        io::write_atomic(&path, content.as_bytes())?;
        Ok(())
    }

    /// Delete the draft file. Returns whether one existed.
    pub fn discard_draft(&self) -> Result<bool> {
        let path = self.store.draft_path()?;
        if path.is_file() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether a draft file exists.
    pub fn has_draft(&self) -> Result<bool> {
        Ok(self.store.draft_path()?.is_file())
    }
}
