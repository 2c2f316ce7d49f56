//! Spendy Domain Layer
//!
//! Value records and collaborator traits shared by every other Spendy crate.
//! Nothing here performs I/O; annotators and generation capabilities are
//! described as traits and implemented in infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **Token**: one word of an annotated sentence (surface form, lemma, POS, NER)
//! - **DependencyGraph**: typed edges between tokens of one sentence, keyed by index
//! - **Sentence**: raw text plus its dependency graph
//! - **ExpenseCandidate**: a (product, quantity, price) triple found in a transcript
//! - **ReminderRecord**: a validated reminder with a resolved due date
//!
//! ## Architecture
//!
//! - Tokens and edges live only for one extraction call
//! - Graph nodes are plain records; edges refer to them by index
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expense;
pub mod graph;
pub mod reminder;
pub mod sentence;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use expense::ExpenseCandidate;
pub use graph::{DependencyEdge, DependencyGraph};
pub use reminder::{upcoming, ReminderDraft, ReminderRecord};
pub use sentence::Sentence;
pub use token::Token;
