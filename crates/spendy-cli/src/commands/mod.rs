//! Command implementations.

pub mod config;
pub mod expenses;
pub mod remind;

pub use self::config::execute_config;
pub use self::expenses::execute_expenses;
pub use self::remind::execute_remind;

use crate::error::{CliError, Result};
use std::io::{self, Read};

/// Take the transcript from the argument or from stdin.
fn read_transcript(text: Option<String>, stdin: bool) -> Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer.trim_end().to_string())
    } else if let Some(text) = text {
        Ok(text)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either a transcript or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_transcript_from_argument() {
        let text = read_transcript(Some("pay rent".to_string()), false).unwrap();
        assert_eq!(text, "pay rent");
    }

    #[test]
    fn test_read_transcript_requires_input() {
        let result = read_transcript(None, false);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
