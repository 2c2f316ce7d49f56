//! Outcome types for reminder extraction

use serde::Serialize;
use spendy_domain::ReminderRecord;
use std::fmt;

/// Result of running the reminder flow on one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ReminderOutcome {
    /// A validated record, ready to persist
    Created(ReminderRecord),
    /// The draft was rejected
    Rejected(Rejection),
}

impl ReminderOutcome {
    /// The record, if one was created
    pub fn record(&self) -> Option<&ReminderRecord> {
        match self {
            ReminderOutcome::Created(record) => Some(record),
            ReminderOutcome::Rejected(_) => None,
        }
    }

    /// The rejection, if the draft was rejected
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ReminderOutcome::Created(_) => None,
            ReminderOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// Why a reminder draft was not turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The answer did not carry four fields
    Unprocessable,
    /// The due date matched neither accepted format
    MissingDueDate,
    /// The due date is in the past
    InvalidDueDate,
}

impl Rejection {
    /// User-facing explanation
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::Unprocessable => {
                "The reminder cannot be processed, please record yourself accurately"
            }
            Rejection::MissingDueDate => "Missing due date, please say when it has to be paid",
            Rejection::InvalidDueDate => "Invalid due date, a reminder cannot be set in the past",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
