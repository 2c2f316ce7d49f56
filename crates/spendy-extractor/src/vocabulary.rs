//! Word lists shared by the matchers and the resolver

/// Units that denote an amount rather than part of a product name
pub const QUANTITY_UNITS: &[&str] = &[
    "tonne",
    "tonnes",
    "kilogram",
    "kilograms",
    "gram",
    "grams",
    "liter",
    "liters",
    "milliliter",
    "milliliters",
    "unit",
    "units",
    "piece",
    "pieces",
    "kg",
    "g",
    "l",
    "ml",
];

/// Symbols written directly before a price
pub const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Words written after a price; "grands" is kept literally
pub const CURRENCY_WORDS: &[&str] = &[
    "dollar", "dollars", "buck", "bucks", "euro", "euros", "pound", "pounds", "yen", "grands",
];

/// Default lemmas of verbs that introduce a purchase
pub const ACQUISITION_VERBS: &[&str] = &["buy", "purchase", "take", "get", "review", "use"];

/// True if `word`, lowercased, is a quantity unit
pub fn is_quantity_unit(word: &str) -> bool {
    let lower = word.to_lowercase();
    QUANTITY_UNITS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_are_case_insensitive() {
        assert!(is_quantity_unit("kg"));
        assert!(is_quantity_unit("KG"));
        assert!(is_quantity_unit("Liters"));
        assert!(!is_quantity_unit("rice"));
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        for word in QUANTITY_UNITS.iter().chain(CURRENCY_WORDS).chain(ACQUISITION_VERBS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
