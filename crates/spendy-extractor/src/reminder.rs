//! LLM-prompted reminder extraction

use crate::config::{ExtractorConfig, FieldFormat};
use crate::due_date::resolve_due;
use crate::error::ExtractorError;
use crate::parser::{FieldParser, JsonFieldParser, QuotedFieldParser};
use crate::prompt::{ReminderPromptBuilder, REMINDER_SCHEMA};
use crate::types::{Rejection, ReminderOutcome};
use chrono::{Local, NaiveDateTime};
use spendy_domain::traits::LlmProvider;
use spendy_domain::ReminderRecord;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Turns a transcript into a single validated reminder
///
/// Prompting, field parsing and due date resolution run in that order and
/// stop at the first failure.
pub struct ReminderExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
    parser: Box<dyn FieldParser>,
}

impl<L> ReminderExtractor<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new extractor; the field parser follows `config.reminder_format`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::Config`] if `config` does not validate.
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let parser: Box<dyn FieldParser> = match config.reminder_format {
            FieldFormat::Quoted => Box::new(QuotedFieldParser),
            FieldFormat::Json => Box::new(JsonFieldParser),
        };

        Ok(Self {
            llm_provider,
            config,
            parser,
        })
    }

    /// Replace the field parser
    pub fn with_parser(mut self, parser: impl FieldParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Extract a reminder, validating the due date against local time
    pub fn extract(&self, transcript: &str) -> Result<ReminderOutcome, ExtractorError> {
        self.extract_at(transcript, Local::now().naive_local())
    }

    /// Extract a reminder, validating the due date against `now`
    ///
    /// A due date equal to `now` is accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the transcript exceeds the configured length or the
    /// LLM provider fails. Rejected drafts are `Ok`.
    pub fn extract_at(
        &self,
        transcript: &str,
        now: NaiveDateTime,
    ) -> Result<ReminderOutcome, ExtractorError> {
        if transcript.len() > self.config.max_transcript_length {
            return Err(ExtractorError::TranscriptTooLong(
                transcript.len(),
                self.config.max_transcript_length,
            ));
        }

        if transcript.trim().is_empty() {
            warn!("Empty transcript, reminder rejected");
            return Ok(ReminderOutcome::Rejected(Rejection::Unprocessable));
        }

        let prompt = ReminderPromptBuilder::new(transcript, self.config.reminder_format).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.call_llm(&prompt)?;
        debug!("LLM response length: {} chars", response.len());

        let draft = match self.parser.parse(&response) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Reminder answer rejected: {}", e);
                return Ok(ReminderOutcome::Rejected(Rejection::Unprocessable));
            }
        };

        let Some(due) = resolve_due(&draft.due) else {
            warn!("Reminder due date '{}' could not be resolved", draft.due);
            return Ok(ReminderOutcome::Rejected(Rejection::MissingDueDate));
        };

        if due < now {
            warn!("Reminder due date {} is before {}", due, now);
            return Ok(ReminderOutcome::Rejected(Rejection::InvalidDueDate));
        }

        info!("Reminder created for '{}' due {}", draft.item, due);
        Ok(ReminderOutcome::Created(ReminderRecord::from_draft(draft, due)))
    }

    /// Call the LLM provider
    fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        let result = match self.config.reminder_format {
            FieldFormat::Quoted => self.llm_provider.generate(prompt),
            FieldFormat::Json => self.llm_provider.generate_structured(prompt, REMINDER_SCHEMA),
        };

        result.map_err(|e| {
            warn!("LLM provider failed: {}", e);
            ExtractorError::Llm(e.to_string())
        })
    }
}
