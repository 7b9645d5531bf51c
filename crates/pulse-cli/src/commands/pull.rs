//! Fetch the live configuration and report what was loaded.

use colored::Colorize;

use pulse_config::Page;
use pulse_core::ConfigSource;

use crate::context::Context;
use crate::error::Result;

/// Load the live configuration and summarize it.
///
/// A failed or misshapen remote fetch is not an error here; the loader
/// degrades to the bundled default and the output says so.
pub fn run_pull(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let (config, source) = ctx.load_live(&settings)?;

    match source {
        ConfigSource::Remote => {
            println!("{} Loaded remote configuration.", "OK".green().bold());
        }
        ConfigSource::Bundled => {
            if settings.fetch_source().is_some() {
                println!(
                    "{} Remote fetch failed; using the bundled default.",
                    "WARN".yellow().bold()
                );
            } else {
                println!(
                    "{} No repository configured; using the bundled default.",
                    "OK".green().bold()
                );
            }
        }
    }

    println!();
    for page in Page::ALL {
        let fields = config.page(page);
        println!(
            "  {} {} fields",
            format!("{page}:").bold(),
            fields.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn pull_without_settings_uses_bundled_default() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(Some(dir.path().to_path_buf()));
        assert!(run_pull(&ctx).is_ok());
    }
}
