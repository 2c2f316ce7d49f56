//! Spendy CLI library
//!
//! Wires the annotator and LLM provider to the extractor and prints what
//! comes back.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
