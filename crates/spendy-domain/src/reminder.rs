//! Reminder module - drafts from the generation capability and validated records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unvalidated reminder fields, exactly as the generation capability wrote them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderDraft {
    /// What the money is going to be spent on (bill, fee, product, ...)
    pub item: String,

    /// Raw price text
    pub price: String,

    /// Raw quantity text
    pub quantity: String,

    /// Raw due date text, expected as `dd-MM-yyyy HH:mm` or `dd-MM-yyyy`
    pub due: String,
}

/// A reminder whose due date has been resolved and validated
///
/// Invariant: `due` was not in the past when the record was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRecord {
    /// What the money is going to be spent on
    pub item: String,

    /// Raw price text
    pub price: String,

    /// Raw quantity text
    pub quantity: String,

    /// Resolved due date and time (local wall clock)
    pub due: NaiveDateTime,

    /// Whether the user has completed the reminder
    pub marked_as_done: bool,
}

impl ReminderRecord {
    /// Build a pending record from a draft and its resolved due date
    pub fn from_draft(draft: ReminderDraft, due: NaiveDateTime) -> Self {
        Self {
            item: draft.item,
            price: draft.price,
            quantity: draft.quantity,
            due,
            marked_as_done: false,
        }
    }

    /// Mark the reminder as done
    pub fn mark_done(&mut self) {
        self.marked_as_done = true;
    }
}

/// Reminders due strictly after `now`, soonest first
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use spendy_domain::{upcoming, ReminderDraft, ReminderRecord};
///
/// let at = |d| NaiveDate::from_ymd_opt(2025, 12, d).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let draft = ReminderDraft {
///     item: "rent".into(),
///     price: "900".into(),
///     quantity: "unknown".into(),
///     due: String::new(),
/// };
/// let records = vec![
///     ReminderRecord::from_draft(draft.clone(), at(20)),
///     ReminderRecord::from_draft(draft.clone(), at(1)),
///     ReminderRecord::from_draft(draft, at(10)),
/// ];
///
/// let next = upcoming(&records, at(5));
/// assert_eq!(next.len(), 2);
/// assert_eq!(next[0].due, at(10));
/// ```
pub fn upcoming(records: &[ReminderRecord], now: NaiveDateTime) -> Vec<&ReminderRecord> {
    let mut pending: Vec<&ReminderRecord> = records.iter().filter(|r| r.due > now).collect();
    pending.sort_by_key(|r| r.due);
    pending
}
