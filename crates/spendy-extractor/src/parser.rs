//! Parse LLM answers into reminder drafts

use crate::error::ExtractorError;
use crate::prompt::UNKNOWN;
use serde_json::Value;
use spendy_domain::ReminderDraft;

const FIELD_COUNT: usize = 4;

/// Reads reminder fields out of an LLM answer
pub trait FieldParser: Send + Sync {
    /// Parse `response` into a draft
    ///
    /// Any error means the answer cannot be processed.
    fn parse(&self, response: &str) -> Result<ReminderDraft, ExtractorError>;
}

/// Collects double-quoted values in the order they appear
///
/// The first four values are item, price, quantity and due. A quote left
/// open at the end of the answer is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedFieldParser;

impl QuotedFieldParser {
    /// Every closed quoted value in `response`
    pub fn values(response: &str) -> Vec<String> {
        let mut values = Vec::new();
        let mut current: Option<String> = None;

        for c in response.chars() {
            if c == '"' {
                match current.take() {
                    Some(value) => values.push(value),
                    None => current = Some(String::new()),
                }
            } else if let Some(value) = current.as_mut() {
                value.push(c);
            }
        }

        values
    }
}

impl FieldParser for QuotedFieldParser {
    fn parse(&self, response: &str) -> Result<ReminderDraft, ExtractorError> {
        let mut values = Self::values(response).into_iter();
        let found = values.len();

        match (values.next(), values.next(), values.next(), values.next()) {
            (Some(item), Some(price), Some(quantity), Some(due)) => Ok(ReminderDraft {
                item,
                price,
                quantity,
                due,
            }),
            _ => Err(ExtractorError::InvalidFormat(format!(
                "expected {} quoted values, found {}",
                FIELD_COUNT, found
            ))),
        }
    }
}

/// Reads a JSON object with fixed keys
///
/// Markdown code fences around the object are tolerated. Numbers are
/// stringified and `null` becomes "unknown".
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFieldParser;

impl FieldParser for JsonFieldParser {
    fn parse(&self, response: &str) -> Result<ReminderDraft, ExtractorError> {
        let json_str = extract_json(response)?;
        let json: Value = serde_json::from_str(&json_str)?;

        let obj = json
            .as_object()
            .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

        let field = |key: &str| {
            let value = obj
                .get(key)
                .ok_or_else(|| ExtractorError::InvalidFormat(format!("Missing '{}'", key)))?;
            field_text(key, value)
        };

        Ok(ReminderDraft {
            item: field("item")?,
            price: field("price")?,
            quantity: field("quantity")?,
            due: field("due")?,
        })
    }
}

fn field_text(key: &str, value: &Value) -> Result<String, ExtractorError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(UNKNOWN.to_string()),
        _ => Err(ExtractorError::InvalidFormat(format!(
            "'{}' must be a string or number",
            key
        ))),
    }
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence and the closing one
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        return Ok(lines[1..end].join("\n"));
    }

    // Prose around a bare object
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(trimmed[start..=end].to_string()),
        _ => Ok(trimmed.to_string()),
    }
}
