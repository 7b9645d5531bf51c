//! Show resolved page content and font variables.

use std::collections::BTreeSet;

use colored::Colorize;

use pulse_config::{FontSlot, Language, Page, Resolver, defaults};

use crate::context::Context;
use crate::error::Result;

/// Print the effective content of one page.
///
/// Every field known to either the live configuration or the bundled
/// default is listed with its resolved value, so the output shows exactly
/// what a visitor would see, fallbacks included.
pub fn run_show(ctx: &Context, page: &str, lang: Option<&str>) -> Result<()> {
    let page: Page = page.parse()?;
    let lang = lang.map(str::parse::<Language>).transpose()?;

    let settings = ctx.settings()?;
    let (config, source) = ctx.load_live(&settings)?;
    let resolver = Resolver::new(config);
    let bundled = defaults::bundled();

    println!(
        "{} {} ({})",
        "Page".blue().bold(),
        page.to_string().yellow(),
        source.as_str().cyan()
    );
    println!();

    let names: BTreeSet<&str> = resolver
        .live()
        .page(page)
        .iter()
        .map(|(name, _)| name)
        .chain(bundled.page(page).iter().map(|(name, _)| name))
        .collect();

    for name in names {
        if let Some(lang) = lang {
            let other = lang.other().suffix();
            if name.ends_with(other) {
                continue;
            }
        }
        let fallback = bundled.field(page, name).unwrap_or("");
        let value = resolver.resolve(page, name, fallback);
        if value.is_empty() {
            println!("  {} {}", format!("{name}:").bold(), "(unset)".dimmed());
        } else {
            println!("  {} {}", format!("{name}:").bold(), value);
        }
    }

    Ok(())
}

/// Print the four effective font variables.
pub fn run_fonts(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let (config, source) = ctx.load_live(&settings)?;
    let resolver = Resolver::new(config);
    let fonts = resolver.fonts();

    println!("{} ({})", "Fonts".blue().bold(), source.as_str().cyan());
    for lang in [Language::Ar, Language::En] {
        for (slot, label) in [(FontSlot::Headings, "headings"), (FontSlot::Body, "body")] {
            println!(
                "  {} {}",
                format!("{}.{label}:", lang.as_str()).bold(),
                fonts.var(lang, slot)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn show_works_offline_from_bundled_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(Some(dir.path().to_path_buf()));
        assert!(run_show(&ctx, "home", None).is_ok());
        assert!(run_show(&ctx, "contact", Some("en")).is_ok());
    }

    #[test]
    fn show_rejects_unknown_page_and_language() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(Some(dir.path().to_path_buf()));
        assert!(run_show(&ctx, "pricing", None).is_err());
        assert!(run_show(&ctx, "home", Some("fr")).is_err());
    }

    #[test]
    fn fonts_print_for_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(Some(dir.path().to_path_buf()));
        assert!(run_fonts(&ctx).is_ok());
    }
}
