use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::services::{translate_lower, Translator};

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

static NUMBER_WORDS: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    let ones = ONES.iter().enumerate().map(|(i, w)| (*w, i as u64));
    let tens = TENS.iter().enumerate().map(|(i, w)| (*w, (i as u64 + 2) * 10));
    ones.chain(tens).collect()
});

static WORD_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// Sums the English number words in `text` ("twenty three" → 23).
///
/// Every recognized word adds its value; there is no positional grammar, so
/// "three twenty" is 23 too and hundreds are not understood. Returns `None`
/// when no word is recognized.
pub fn parse_number_words(text: &str, translator: &dyn Translator) -> Option<u64> {
    sum_number_words(&translate_lower(translator, text))
}

/// Flat sum over already lower-cased text.
pub(crate) fn sum_number_words(lowered: &str) -> Option<u64> {
    WORD_SEPARATORS
        .split(lowered)
        .filter_map(|word| NUMBER_WORDS.get(word).copied())
        .fold(None, |acc, n| Some(acc.unwrap_or(0u64).saturating_add(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{GlossaryTranslator, NoTranslation};

    fn parse(text: &str) -> Option<u64> {
        parse_number_words(text, &NoTranslation)
    }

    #[test]
    fn compound_numbers() {
        assert_eq!(parse("twenty three"), Some(23));
        assert_eq!(parse("Ninety-Nine"), Some(99));
        assert_eq!(parse("eleven"), Some(11));
    }

    #[test]
    fn flat_sum_has_no_positional_grammar() {
        assert_eq!(parse("three twenty"), Some(23));
        assert_eq!(parse("one hundred"), Some(1));
        assert_eq!(parse("ten ten"), Some(20));
    }

    #[test]
    fn unknown_words_ignored() {
        assert_eq!(parse("hello"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("about five days"), Some(5));
    }

    #[test]
    fn zero_is_recognized() {
        assert_eq!(parse("zero"), Some(0));
    }

    #[test]
    fn translated_before_lookup() {
        let t = GlossaryTranslator::from_pairs([("drei", "three")]);
        assert_eq!(parse_number_words("Drei", &t), Some(3));
    }
}
