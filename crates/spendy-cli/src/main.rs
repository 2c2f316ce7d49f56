//! Spendy CLI - Command-line interface for the voice-command extractor.

use anyhow::Context;
use clap::Parser;
use spendy_cli::commands;
use spendy_cli::{Cli, Command, Config, Formatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries only results.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;
    debug!("Configuration path: {}", path.display());
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Expenses(args) => commands::execute_expenses(args, &config, &formatter)?,
        Command::Remind(args) => commands::execute_remind(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter)?,
    }

    Ok(())
}
