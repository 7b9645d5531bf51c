//! Publish the working draft to the configured repository.

use colored::Colorize;

use pulse_core::Site;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the publish transaction for the saved draft.
///
/// Requires complete publish credentials and a saved draft. On success the
/// draft file is removed; the live configuration the next command sees is
/// the one just committed. A version conflict is reported without retrying.
pub fn run_publish(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let store = ctx.publish_store(&settings)?;

    if !ctx.has_draft()? {
        return Err(CliError::user(
            "No draft to publish; edit one with `medpulse draft set`",
        ));
    }

    let mut site = Site::load(settings, Some(&store));
    let draft = ctx.load_draft(site.resolver().live())?;

    if !draft.is_modified(site.resolver().live()) {
        println!(
            "{} Draft matches the live configuration; publishing anyway.",
            "WARN".yellow().bold()
        );
    }

    let receipt = match site.publish(&store, draft) {
        Ok(receipt) => receipt,
        Err(e) if e.is_conflict() => {
            return Err(CliError::user(
                "The remote configuration changed since the draft was loaded; \
                 run `medpulse draft diff` against the new state and publish again",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    ctx.discard_draft()?;

    println!("{} Published.", "OK".green().bold());
    println!("  {} {}", "version:".bold(), receipt.sha);
    println!("  {} {}", "message:".bold(), receipt.message);

    Ok(())
}
