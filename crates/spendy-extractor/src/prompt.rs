//! Prompt construction for reminder extraction

use crate::config::FieldFormat;

/// Placeholder the LLM writes for a field the transcript does not mention
pub const UNKNOWN: &str = "unknown";

/// JSON schema passed to providers that support structured output
pub const REMINDER_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "item": {"type": "string"},
    "price": {"type": "string"},
    "quantity": {"type": "string"},
    "due": {"type": "string"}
  },
  "required": ["item", "price", "quantity", "due"]
}"#;

/// Builds the prompt asking the LLM for reminder fields
pub struct ReminderPromptBuilder<'a> {
    transcript: &'a str,
    format: FieldFormat,
}

impl<'a> ReminderPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(transcript: &'a str, format: FieldFormat) -> Self {
        Self { transcript, format }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push('[');
        prompt.push_str(self.transcript.trim());
        prompt.push_str("]\n\n");
        prompt.push_str(FIELD_INSTRUCTIONS);
        prompt.push_str("\n\n");

        match self.format {
            FieldFormat::Quoted => prompt.push_str(QUOTED_ANSWER),
            FieldFormat::Json => prompt.push_str(JSON_ANSWER),
        }

        prompt
    }
}

const FIELD_INSTRUCTIONS: &str = r#"The text inside the brackets is a raw voice transcript. Extract from it:
- item: what the money is going to be spent on (a bill, a fine, a fee, a product, ...)
- price
- quantity
- due: when it has to be paid

Copy each value as it appears in the text, without opinions or extra words.
If a value is not mentioned, write unknown.
Write the due date as dd-MM-yyyy HH:mm, or as dd-MM-yyyy when no time is given."#;

const QUOTED_ANSWER: &str = r#"Put every value in double quotation marks and answer with exactly this structure:
item : "...", price : "...", quantity : "...", due : "...""#;

const JSON_ANSWER: &str = r#"Answer with a single JSON object and nothing else:
{"item": "...", "price": "...", "quantity": "...", "due": "..."}"#;
