//! Remind command implementation.

use super::read_transcript;
use crate::cli::RemindArgs;
use crate::config::{Config, LlmSettings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use spendy_extractor::ReminderExtractor;
use spendy_llm::ChatCompletionsProvider;
use std::env;
use std::time::Duration;
use tracing::debug;

/// Execute the remind command.
///
/// A rejected reminder is printed and is not an error.
pub fn execute_remind(args: RemindArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let transcript = read_transcript(args.text, args.stdin)?;
    let provider = build_provider(&config.llm)?;

    let extractor = ReminderExtractor::new(provider, config.extractor.clone())?;
    let outcome = extractor.extract(&transcript)?;

    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

fn build_provider(settings: &LlmSettings) -> Result<ChatCompletionsProvider> {
    let api_key = api_key(settings)?;
    debug!("Prompting chat model {} at {}", settings.model, settings.endpoint);
    let provider = ChatCompletionsProvider::with_timeout(
        &settings.endpoint,
        &settings.model,
        api_key,
        Duration::from_secs(settings.timeout_secs),
    )?
    .with_max_tokens(settings.max_tokens)
    .with_temperature(settings.temperature);

    Ok(provider)
}

fn api_key(settings: &LlmSettings) -> Result<String> {
    match env::var(&settings.api_key_env) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(CliError::Config(format!(
            "Environment variable {} is not set",
            settings.api_key_env
        ))),
    }
}
