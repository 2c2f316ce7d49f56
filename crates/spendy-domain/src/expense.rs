//! Expense candidates found in a voice command

use serde::{Deserialize, Serialize};

/// A (product, quantity, price) triple extracted from one sentence
///
/// Quantity and price are the raw matched substrings; they are not
/// normalized or converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCandidate {
    /// Product phrase, words in original sentence order
    pub product: String,

    /// Quantity phrase such as "2 kg", if one was found
    pub quantity: Option<String>,

    /// Price phrase such as "$500", if one was found
    pub price: Option<String>,
}

impl ExpenseCandidate {
    /// Create a new candidate
    pub fn new(product: impl Into<String>, quantity: Option<String>, price: Option<String>) -> Self {
        Self {
            product: product.into(),
            quantity,
            price,
        }
    }
}
