//! Quantity and price matchers over raw sentence text

use crate::vocabulary::{CURRENCY_SYMBOLS, CURRENCY_WORDS, QUANTITY_UNITS};
use lazy_static::lazy_static;
use regex::Regex;

const NUMBER: &str = r"\d+(?:[.,]\d+)?";

lazy_static! {
    // Number, whitespace, unit
    pub static ref QUANTITY_PATTERN: Regex = Regex::new(&format!(
        r"(?i)\b{}\s+(?:{})\b",
        NUMBER,
        alternation(QUANTITY_UNITS)
    ))
    .unwrap();

    // Symbol then number, or number, whitespace, currency word
    pub static ref PRICE_PATTERN: Regex = Regex::new(&format!(
        r"(?i)[{}]{}|\b{}\s+(?:{})\b",
        regex::escape(&CURRENCY_SYMBOLS.iter().collect::<String>()),
        NUMBER,
        NUMBER,
        alternation(CURRENCY_WORDS)
    ))
    .unwrap();
}

/// Longest words first so that no alternative shadows a longer one
fn alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.len()));
    sorted
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

/// First quantity phrase in `text`, such as "2 kg"
pub fn match_quantity(text: &str) -> Option<String> {
    first_whole_number_match(&QUANTITY_PATTERN, text)
}

/// First price phrase in `text`, such as "$500" or "20 bucks"
pub fn match_price(text: &str) -> Option<String> {
    first_whole_number_match(&PRICE_PATTERN, text)
}

/// First match whose number is not a fragment of a longer one
///
/// A match may not start right after a digit, '.' or ',', and may not end
/// right before a digit or a separator followed by a digit.
fn first_whole_number_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .find_iter(text)
        .find(|m| {
            let before = text[..m.start()].chars().next_back();
            let mut after = text[m.end()..].chars();
            let starts_inside = before.is_some_and(is_number_char);
            let ends_inside = match after.next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('.' | ',') => after.next().is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            !starts_inside && !ends_inside
        })
        .map(|m| m.as_str().to_string())
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quantity_with_unit() {
        assert_eq!(match_quantity("I bought 2 kg rice").as_deref(), Some("2 kg"));
        assert_eq!(match_quantity("1.5 liters of milk").as_deref(), Some("1.5 liters"));
        assert_eq!(match_quantity("0,5 L water").as_deref(), Some("0,5 L"));
    }

    #[test]
    fn test_quantity_first_match_wins() {
        assert_eq!(
            match_quantity("3 pieces of cake and 2 kg apples").as_deref(),
            Some("3 pieces")
        );
    }

    #[test]
    fn test_quantity_requires_unit() {
        assert_eq!(match_quantity("2 big apples for $3"), None);
        assert_eq!(match_quantity("5 apples"), None);
    }

    #[test]
    fn test_quantity_requires_whitespace() {
        assert_eq!(match_quantity("20kg rice for $5"), None);
    }

    #[test]
    fn test_quantity_unit_must_end_at_word_boundary() {
        // "g" alone, not the start of "good"
        assert_eq!(match_quantity("2 good apples"), None);
        assert_eq!(match_quantity("2 g sugar").as_deref(), Some("2 g"));
    }

    #[test]
    fn test_price_with_symbol() {
        assert_eq!(match_price("2 big apples for $3").as_deref(), Some("$3"));
        assert_eq!(match_price("a laptop for €499.99").as_deref(), Some("€499.99"));
        assert_eq!(match_price("tea for £2,50").as_deref(), Some("£2,50"));
    }

    #[test]
    fn test_price_with_word() {
        assert_eq!(match_price("rice for 20 bucks").as_deref(), Some("20 bucks"));
        assert_eq!(match_price("a car for 5 grands").as_deref(), Some("5 grands"));
        assert_eq!(match_price("sushi for 900 YEN").as_deref(), Some("900 YEN"));
    }

    #[test]
    fn test_price_symbol_must_touch_number() {
        assert_eq!(match_price("costs $ 5"), None);
    }

    #[test]
    fn test_price_first_match_wins() {
        assert_eq!(match_price("$5 now and $7 later").as_deref(), Some("$5"));
        assert_eq!(match_price("10 euros or $12").as_deref(), Some("10 euros"));
    }

    #[test]
    fn test_price_magnitude_suffix_is_not_a_number() {
        assert_eq!(match_price("a Porsche 911 for 500k dollars"), None);
    }

    #[test]
    fn test_grouped_numbers_are_not_cut_down() {
        assert_eq!(match_price("a sofa for 1,200.50 dollars"), None);
        assert_eq!(match_price("a sofa for €1,200.50"), None);
        assert_eq!(match_quantity("buy 1,250.5 kg flour"), None);
    }

    #[test]
    fn test_later_whole_number_still_matches() {
        assert_eq!(
            match_price("a sofa for 1,200.50 dollars, delivery $30").as_deref(),
            Some("$30")
        );
        assert_eq!(
            match_quantity("1.2.5 kg of sand and 3 kg of gravel").as_deref(),
            Some("3 kg")
        );
    }

    #[test]
    fn test_sentence_punctuation_after_number() {
        assert_eq!(match_price("it cost $12.").as_deref(), Some("$12"));
        assert_eq!(match_price("€12, thanks").as_deref(), Some("€12"));
    }

    #[test]
    fn test_singular_currency_words() {
        assert_eq!(match_price("a coffee for 1 dollar").as_deref(), Some("1 dollar"));
        assert_eq!(match_price("a pen for 1 buck").as_deref(), Some("1 buck"));
        assert_eq!(match_price("bread for 1 euro").as_deref(), Some("1 euro"));
        assert_eq!(match_price("stamps for 1 pound").as_deref(), Some("1 pound"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_quantity("hello there"), None);
        assert_eq!(match_price("hello there"), None);
        assert_eq!(match_quantity(""), None);
        assert_eq!(match_price(""), None);
    }

    proptest! {
        #[test]
        fn prop_symbol_price_is_found(amount in 0u32..1_000_000, prefix in "[a-z ]{0,20}") {
            let text = format!("{prefix} ${amount}");
            prop_assert_eq!(match_price(&text), Some(format!("${amount}")));
        }

        #[test]
        fn prop_unitless_numbers_are_not_quantities(n in 0u32..10_000, word in "[a-z]{3,8}") {
            prop_assume!(!QUANTITY_UNITS.contains(&word.as_str()));
            let text = format!("{n} {word}");
            prop_assert_eq!(match_quantity(&text), None);
        }
    }
}
