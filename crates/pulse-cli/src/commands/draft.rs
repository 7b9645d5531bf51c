//! Edit, inspect, and discard the working draft.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use pulse_config::{FieldChange, FontSlot, Language, Page};

use crate::cli::DraftAction;
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run a draft subcommand.
pub fn run_draft(ctx: &Context, action: DraftAction) -> Result<()> {
    match action {
        DraftAction::Set { page, field, value } => run_set(ctx, &page, &field, &value),
        DraftAction::Show => run_show(ctx),
        DraftAction::Diff => run_diff(ctx),
        DraftAction::Discard => run_discard(ctx),
    }
}

fn run_set(ctx: &Context, page: &str, field: &str, value: &str) -> Result<()> {
    let settings = ctx.settings()?;
    let (live, _) = ctx.load_live(&settings)?;
    let mut draft = ctx.load_draft(&live)?;

    // `fonts` addresses typography instead of a page: `fonts en.headings`.
    if page == "fonts" {
        let (lang, slot) = parse_font_field(field)?;
        draft.set_font(lang, slot, value);
    } else {
        let page: Page = page.parse()?;
        draft.set_field(page, field, value);
    }

    ctx.save_draft(&draft)?;
    println!(
        "{} Set {} in the draft.",
        "OK".green().bold(),
        format!("{page}.{field}").yellow()
    );
    Ok(())
}

fn parse_font_field(field: &str) -> Result<(Language, FontSlot)> {
    let invalid = || {
        CliError::user(format!(
            "Invalid font field '{field}'; expected <ar|en>.<headings|body>"
        ))
    };
    let (lang, slot) = field.split_once('.').ok_or_else(invalid)?;
    let lang = lang.parse::<Language>().map_err(|_| invalid())?;
    let slot = match slot {
        "headings" => FontSlot::Headings,
        "body" => FontSlot::Body,
        _ => return Err(invalid()),
    };
    Ok((lang, slot))
}

fn run_show(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let (live, _) = ctx.load_live(&settings)?;
    let draft = ctx.load_draft(&live)?;

    let state = if ctx.has_draft()? {
        "saved draft"
    } else {
        "no draft; showing live"
    };
    println!("{} ({})", "Draft".blue().bold(), state.cyan());
    println!();

    let fonts = &draft.config().fonts;
    for lang in [Language::Ar, Language::En] {
        let set = fonts.for_language(lang);
        println!(
            "  {} {} / {}",
            format!("fonts.{}:", lang.as_str()).bold(),
            set.headings,
            set.body
        );
    }
    for page in Page::ALL {
        let fields = draft.config().page(page);
        if fields.is_empty() {
            continue;
        }
        println!();
        println!("  {}", format!("{page}:").bold());
        for (name, value) in fields.iter() {
            println!("    {name} = {value}");
        }
    }

    Ok(())
}

fn run_diff(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let (live, _) = ctx.load_live(&settings)?;
    let draft = ctx.load_draft(&live)?;

    let changes = draft.changes(&live);
    if changes.is_empty() {
        println!(
            "{} Draft matches the live configuration.",
            "OK".green().bold()
        );
        return Ok(());
    }

    println!(
        "{} {} pending change(s)",
        "Diff".blue().bold(),
        changes.len()
    );
    println!();
    for change in &changes {
        print_change(change);
    }
    println!();
    println!("Run {} to commit them.", "medpulse publish".cyan());

    Ok(())
}

fn print_change(change: &FieldChange) {
    println!("  {}", change.location.bold());
    match (&change.old, &change.new) {
        (Some(old), Some(new)) => {
            let diff = TextDiff::from_lines(old.as_str(), new.as_str());
            for line in diff.iter_all_changes() {
                let text = line.to_string_lossy();
                let text = text.trim_end_matches('\n');
                match line.tag() {
                    ChangeTag::Delete => println!("    {} {}", "-".red(), text.red()),
                    ChangeTag::Insert => println!("    {} {}", "+".green(), text.green()),
                    ChangeTag::Equal => println!("      {text}"),
                }
            }
        }
        (None, Some(new)) => println!("    {} {}", "+".green(), new.green()),
        (Some(old), None) => println!("    {} {}", "-".red(), old.red()),
        (None, None) => {}
    }
}

fn run_discard(ctx: &Context) -> Result<()> {
    if ctx.discard_draft()? {
        println!("{} Draft discarded.", "OK".green().bold());
    } else {
        println!("{} No draft to discard.", "OK".green().bold());
    }
    Ok(())
}
