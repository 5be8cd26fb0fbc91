//! Collaborator interfaces.
//!
//! The parsers only depend on these traits and never retry a failing
//! collaborator: an `Err` is replaced on the spot by the documented fallback
//! (original text for translation, path basename for name extraction).

mod clock;
mod error;
mod translate;

pub use clock::{FixedClock, SystemClock};
pub use error::CollabError;
pub use translate::{GlossaryTranslator, NoTranslation};

/// Wall-clock reference for relative-day phrases ("resets today").
pub trait Clock: Send + Sync {
    fn seconds_until_midnight(&self) -> u64;
}

/// Turns a localized fragment into the English vocabulary the parsers know.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str) -> Result<String, CollabError>;
}

/// Pulls a display name out of structured input (link, header value, ...).
pub trait NameExtractor: Send + Sync {
    fn extract_name(&self, raw: &str) -> Result<String, CollabError>;
}

/// Strips characters that are unsafe in file names. Total.
pub trait Sanitizer: Send + Sync {
    fn sanitize_name(&self, text: &str) -> String;
}

/// Lower-cased translation of `text`, or of `text` itself when the translator fails.
pub(crate) fn translate_lower(translator: &dyn Translator, text: &str) -> String {
    translator
        .translate(text)
        .unwrap_or_else(|_| text.to_string())
        .to_lowercase()
}
