//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use spendy_domain::{ExpenseCandidate, ReminderRecord};
use spendy_extractor::{ReminderOutcome, UNKNOWN};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const DUE_DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format expense candidates.
    pub fn format_candidates(&self, candidates: &[ExpenseCandidate]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(candidates)?),
            OutputFormat::Table => Ok(self.format_candidates_table(candidates)),
            OutputFormat::Quiet => Ok(candidates
                .iter()
                .map(|c| c.product.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_candidates_table(&self, candidates: &[ExpenseCandidate]) -> String {
        if candidates.is_empty() {
            return self.colorize("No expenses found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Product", "Quantity", "Price"]);

        for candidate in candidates {
            builder.push_record([
                candidate.product.as_str(),
                candidate.quantity.as_deref().unwrap_or("-"),
                candidate.price.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a reminder outcome.
    ///
    /// Rejections are rendered as their user-facing message.
    pub fn format_outcome(&self, outcome: &ReminderOutcome) -> Result<String> {
        match (self.format, outcome) {
            (OutputFormat::Json, _) => Ok(serde_json::to_string_pretty(outcome)?),
            (OutputFormat::Table, ReminderOutcome::Created(record)) => {
                Ok(self.format_record_table(record))
            }
            (OutputFormat::Quiet, ReminderOutcome::Created(record)) => Ok(record.item.clone()),
            (_, ReminderOutcome::Rejected(rejection)) => Ok(self.warning(rejection.message())),
        }
    }

    fn format_record_table(&self, record: &ReminderRecord) -> String {
        let due = record.due.format(DUE_DISPLAY_FORMAT).to_string();

        let mut builder = Builder::default();
        builder.push_record(["Item", "Price", "Quantity", "Due"]);
        builder.push_record([
            record.item.as_str(),
            display_field(&record.price),
            display_field(&record.quantity),
            due.as_str(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.success("Reminder created"), table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// The placeholder for a field the transcript did not mention.
fn display_field(value: &str) -> &str {
    if value.eq_ignore_ascii_case(UNKNOWN) {
        "-"
    } else {
        value
    }
}
