//! Word-level translators.

use std::collections::HashMap;

use super::{CollabError, Translator};

/// Replaces whole whitespace-separated words using a fixed glossary.
///
/// Matching is case-insensitive; unknown words are kept as they are, so the
/// translation of English text is the text itself.
#[derive(Debug, Clone, Default)]
pub struct GlossaryTranslator {
    words: HashMap<String, String>,
}

impl GlossaryTranslator {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let words = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
            .collect();
        Self { words }
    }
}

impl Translator for GlossaryTranslator {
    fn translate(&self, text: &str) -> Result<String, CollabError> {
        if self.words.is_empty() {
            return Ok(text.to_string());
        }
        let out: Vec<&str> = text
            .split_whitespace()
            .map(|word| {
                self.words
                    .get(&word.to_lowercase())
                    .map(String::as_str)
                    .unwrap_or(word)
            })
            .collect();
        Ok(out.join(" "))
    }
}

/// Translator that is never available; parsers fall back to the original text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, text: &str) -> Result<String, CollabError> {
        Err(CollabError::Translation(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_words() {
        let t = GlossaryTranslator::from_pairs([("Stunden", "hours"), ("zwei", "two")]);
        assert_eq!(t.translate("Zwei stunden").unwrap(), "two hours");
    }

    #[test]
    fn keeps_unknown_words() {
        let t = GlossaryTranslator::from_pairs([("heute", "today")]);
        assert_eq!(t.translate("expires 2 days").unwrap(), "expires 2 days");
    }

    #[test]
    fn empty_glossary_is_identity() {
        let t = GlossaryTranslator::default();
        assert_eq!(t.translate("  a  b ").unwrap(), "  a  b ");
    }

    #[test]
    fn no_translation_fails() {
        assert!(NoTranslation.translate("x").is_err());
    }
}
