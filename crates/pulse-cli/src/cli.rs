//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MedPulse content core - manage the bilingual site configuration
#[derive(Parser, Debug)]
#[command(name = "medpulse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configuration directory (settings and draft files)
    #[arg(long, global = true, env = "MEDPULSE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved content of a page
    ///
    /// Fields come from the live configuration (remote when configured,
    /// bundled otherwise); missing fields show their compiled defaults.
    Show {
        /// Page name: home, about, founder, or contact
        page: String,

        /// Limit output to one language (ar or en)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Show the four effective font variables
    Fonts,

    /// Fetch the live configuration and report its source
    Pull,

    /// Read or change persisted operator settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Edit the working draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Publish the working draft to the configured repository
    ///
    /// Runs the read-version-then-commit transaction. A version conflict
    /// means another publish won the race; re-run after reviewing.
    Publish,

    /// Call the MedPulse REST API
    ///
    /// Uses the `api-token` setting for authentication when present.
    Api {
        #[command(subcommand)]
        action: ApiAction,
    },
}

/// API subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ApiAction {
    /// List a resource collection
    ///
    /// Resources: events, articles, experts, authors, categories,
    /// contact-forms, users, roles, permissions
    List {
        /// Resource name
        resource: String,

        /// Page number, for paged collections
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Fetch a single item
    Get {
        /// Resource name
        resource: String,
        /// Item id
        id: u64,
    },

    /// Delete an item
    Delete {
        /// Resource name
        resource: String,
        /// Item id
        id: u64,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print the current settings (tokens redacted)
    Get,

    /// Set one setting
    ///
    /// Keys: language, owner, repo, token, api-token
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },

    /// Clear one setting
    Unset {
        /// Setting key
        key: String,
    },
}

/// Draft subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    /// Set a field in the draft (creates the draft from live on first use)
    Set {
        /// Page name
        page: String,
        /// Full field name, e.g. hero_title_en
        field: String,
        /// New value
        value: String,
    },

    /// Print the draft's fields
    Show,

    /// Diff the draft against the live configuration
    Diff,

    /// Discard the draft without publishing
    Discard,
}
