//! Spendy Extractor
//!
//! Turns transcripts of spoken commands into structured financial records.
//!
//! # Overview
//!
//! Two extraction pathways share one configuration and error type:
//!
//! - **Expenses**: a deterministic, grammar-driven pass over annotated
//!   sentences that yields zero or more (product, quantity, price) candidates.
//! - **Reminders**: an LLM-prompted pass that yields a single
//!   (item, price, quantity, due) record, or a rejection.
//!
//! # Architecture
//!
//! ```text
//! Transcript → Annotator → Sentences → Strategy → Resolver + Matchers → ExpenseCandidates
//! Transcript → Prompt → LLM → FieldParser → Due date → ReminderOutcome
//! ```
//!
//! # Example Usage
//!
//! ```
//! use spendy_extractor::{ExtractorConfig, ReminderExtractor, ReminderOutcome};
//! use spendy_llm::MockProvider;
//! use chrono::NaiveDate;
//!
//! let llm = MockProvider::new(r#""rice","20","2kg","25-12-2025 14:00""#);
//! let extractor = ReminderExtractor::new(llm, ExtractorConfig::default()).unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let outcome = extractor.extract_at("remind me to buy 2kg rice for 20 on christmas", now).unwrap();
//!
//! match outcome {
//!     ReminderOutcome::Created(record) => assert_eq!(record.item, "rice"),
//!     ReminderOutcome::Rejected(rejection) => panic!("{}", rejection),
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod due_date;
mod error;
mod expense;
mod parser;
mod patterns;
mod prompt;
mod reminder;
mod resolver;
mod strategy;
mod types;
pub mod vocabulary;


pub use config::{ExtractorConfig, FieldFormat};
pub use due_date::{resolve_due, DATE_FORMAT, DATE_TIME_FORMAT};
pub use error::ExtractorError;
pub use expense::ExpenseExtractor;
pub use parser::{FieldParser, JsonFieldParser, QuotedFieldParser};
pub use patterns::{match_price, match_quantity};
pub use prompt::{ReminderPromptBuilder, REMINDER_SCHEMA, UNKNOWN};
pub use reminder::ReminderExtractor;
pub use resolver::{conjoined_nouns, extract_modifiers, product_phrase};
pub use strategy::{has_verb, SentenceStrategy};
pub use types::{Rejection, ReminderOutcome};
