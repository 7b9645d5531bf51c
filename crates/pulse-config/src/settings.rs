//! Locally persisted operator settings.
//!
//! The browser front end keeps these in local storage; here they live in a
//! TOML file under the platform configuration directory:
//!
//! - Linux: `~/.config/medpulse/settings.toml`
//! - macOS: `~/Library/Application Support/medpulse/settings.toml`
//! - Windows: `%APPDATA%\medpulse\settings.toml`
//!
//! Values are plain strings, cleared only by explicit operator action.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io::write_atomic;
use crate::language::Language;

/// Persisted operator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Active display language. Defaults to Arabic.
    #[serde(default)]
    pub language: Language,

    /// Blob-store repository owner for publishing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_owner: Option<String>,

    /// Blob-store repository name for publishing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<String>,

    /// Bearer token for the blob-store commit API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_token: Option<String>,

    /// Bearer token for the MedPulse REST API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

/// Owner/repo/token triple, available only when all three are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

impl Settings {
    /// The publish credentials, when complete.
    ///
    /// Publishing requires all three of owner, repo, and token; a partial
    /// set behaves as if none were configured.
    pub fn publish_target(&self) -> Option<PublishTarget> {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        Some(PublishTarget {
            owner: non_empty(&self.git_owner)?,
            repo: non_empty(&self.git_repo)?,
            token: non_empty(&self.git_token)?,
        })
    }

    /// The owner/repo pair used for read-only config fetches.
    ///
    /// Reading the raw blob needs no token, so a load is attempted as soon
    /// as owner and repo are both present.
    pub fn fetch_source(&self) -> Option<(String, String)> {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        Some((non_empty(&self.git_owner)?, non_empty(&self.git_repo)?))
    }
}

/// Loads and saves [`Settings`] under the platform configuration directory.
pub struct SettingsStore {
    /// Override for the configuration directory (used for testing).
    /// When `None`, the platform directory is used via `dirs::config_dir()`.
    dir_override: Option<PathBuf>,
}

impl SettingsStore {
    /// Store rooted at the platform configuration directory.
    pub fn new() -> Self {
        Self { dir_override: None }
    }

    /// Store rooted at a custom directory, for tests.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            dir_override: Some(dir),
        }
    }

    fn dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.dir_override {
            return Ok(dir.clone());
        }
        dirs::config_dir()
            .map(|d| d.join("medpulse"))
            .ok_or(Error::NoConfigDir)
    }

    /// Path of the settings file.
    pub fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.dir()?.join("settings.toml"))
    }

    /// Path of the draft file the CLI editor works on.
    pub fn draft_path(&self) -> Result<PathBuf> {
        Ok(self.dir()?.join("draft.json"))
    }

    /// Load settings; a missing file yields defaults.
    pub fn load(&self) -> Result<Settings> {
        let path = self.settings_path()?;
        if !path.is_file() {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save settings atomically.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let path = self.settings_path()?;
        let content = toml::to_string_pretty(settings)?;
        write_atomic(&path, content.as_bytes())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
