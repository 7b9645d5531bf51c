//! MedPulse content CLI
//!
//! The operator command-line interface for the bilingual site
//! configuration: inspect resolved content, edit a draft, and publish it.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = Context::new(cli.config_dir);

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            // No command provided - show help hint
            println!("{} MedPulse content CLI", "medpulse".green().bold());
            println!();
            println!("Run {} for available commands.", "medpulse --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Show { page, lang } => commands::run_show(ctx, &page, lang.as_deref()),
        Commands::Fonts => commands::run_fonts(ctx),
        Commands::Pull => commands::run_pull(ctx),
        Commands::Settings { action } => commands::run_settings(ctx, action),
        Commands::Draft { action } => commands::run_draft(ctx, action),
        Commands::Publish => commands::run_publish(ctx),
        Commands::Api { action } => commands::run_api(ctx, action),
    }
}
