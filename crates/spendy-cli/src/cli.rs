//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spendy CLI - Turn spoken commands into expenses and payment reminders.
#[derive(Debug, Parser)]
#[command(name = "spendy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SPENDY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (products or items only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract expense candidates from a transcript
    Expenses(ExpensesArgs),

    /// Extract a payment reminder from a transcript
    Remind(RemindArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the expenses command.
#[derive(Debug, Parser)]
pub struct ExpensesArgs {
    /// Transcript text
    pub text: Option<String>,

    /// Read the transcript from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Read pre-annotated sentences from a CoNLL-U file instead of calling the annotator service
    #[arg(long)]
    pub conllu: Option<PathBuf>,
}

/// Arguments for the remind command.
#[derive(Debug, Parser)]
pub struct RemindArgs {
    /// Transcript text
    pub text: Option<String>,

    /// Read the transcript from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
