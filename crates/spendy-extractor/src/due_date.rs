//! Due date resolution for reminder drafts

use chrono::{NaiveDate, NaiveDateTime};

/// `dd-MM-yyyy HH:mm`
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// `dd-MM-yyyy`, resolved to midnight
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Resolve a due date written by the LLM
///
/// Tries the date-and-time format first, then the date-only format at
/// midnight. Returns `None` when neither applies, including for "unknown".
///
/// # Examples
///
/// ```
/// use spendy_extractor::resolve_due;
///
/// let due = resolve_due("25-12-2025 14:00").unwrap();
/// assert_eq!(due.to_string(), "2025-12-25 14:00:00");
///
/// let midnight = resolve_due("25-12-2025").unwrap();
/// assert_eq!(midnight.to_string(), "2025-12-25 00:00:00");
///
/// assert!(resolve_due("unknown").is_none());
/// ```
pub fn resolve_due(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_date_and_time() {
        let due = resolve_due("25-12-2025 14:00").unwrap();
        assert_eq!((due.day(), due.month(), due.year()), (25, 12, 2025));
        assert_eq!((due.hour(), due.minute()), (14, 0));
    }

    #[test]
    fn test_date_only_is_midnight() {
        let due = resolve_due("01-02-2026").unwrap();
        assert_eq!((due.hour(), due.minute(), due.second()), (0, 0, 0));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(resolve_due("  01-02-2026 09:30 ").is_some());
    }

    #[test]
    fn test_unparseable() {
        assert!(resolve_due("unknown").is_none());
        assert!(resolve_due("").is_none());
        assert!(resolve_due("next Friday").is_none());
        assert!(resolve_due("2025-12-25").is_none());
        assert!(resolve_due("32-01-2026").is_none());
        assert!(resolve_due("25-12-2025 25:00").is_none());
    }
}
