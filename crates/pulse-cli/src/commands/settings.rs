//! Read and change persisted operator settings.

use colored::Colorize;

use pulse_config::{Language, Settings};

use crate::cli::SettingsAction;
use crate::context::Context;
use crate::error::{CliError, Result};

const KEYS: &str = "language, owner, repo, token, api-token";

/// Run a settings subcommand.
pub fn run_settings(ctx: &Context, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Get => run_get(ctx),
        SettingsAction::Set { key, value } => run_set(ctx, &key, &value),
        SettingsAction::Unset { key } => run_unset(ctx, &key),
    }
}

fn run_get(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;

    println!("{}", "Settings".blue().bold());
    println!("  {} {}", "language:".bold(), settings.language.as_str());
    print_value("owner", settings.git_owner.as_deref(), false);
    print_value("repo", settings.git_repo.as_deref(), false);
    print_value("token", settings.git_token.as_deref(), true);
    print_value("api-token", settings.api_token.as_deref(), true);

    Ok(())
}

fn print_value(key: &str, value: Option<&str>, secret: bool) {
    let label = format!("{key}:").bold();
    match value.filter(|v| !v.is_empty()) {
        Some(v) if secret => println!("  {} {}", label, redact(v)),
        Some(v) => println!("  {label} {v}"),
        None => println!("  {} {}", label, "(unset)".dimmed()),
    }
}

/// Tokens are never echoed back; only a short prefix survives for
/// recognition. A token too short to have a safe prefix is masked
/// entirely.
fn redact(token: &str) -> String {
    if token.chars().count() <= 4 {
        return "********".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}********")
}

fn run_set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let store = ctx.settings_store();
    let mut settings = store.load()?;
    apply(&mut settings, key, Some(value))?;
    store.save(&settings)?;
    println!("{} Set {}.", "OK".green().bold(), key.yellow());
    Ok(())
}

fn run_unset(ctx: &Context, key: &str) -> Result<()> {
    let store = ctx.settings_store();
    let mut settings = store.load()?;
    apply(&mut settings, key, None)?;
    store.save(&settings)?;
    println!("{} Cleared {}.", "OK".green().bold(), key.yellow());
    Ok(())
}

fn apply(settings: &mut Settings, key: &str, value: Option<&str>) -> Result<()> {
    match key {
        "language" => {
            settings.language = match value {
                Some(v) => v.parse::<Language>()?,
                None => Language::default(),
            };
        }
        "owner" => settings.git_owner = value.map(str::to_string),
        "repo" => settings.git_repo = value.map(str::to_string),
        "token" => settings.git_token = value.map(str::to_string),
        "api-token" => settings.api_token = value.map(str::to_string),
        other => {
            return Err(CliError::user(format!(
                "Unknown setting key '{other}'; expected one of {KEYS}"
            )));
        }
    }
    Ok(())
}
