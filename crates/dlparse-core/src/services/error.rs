//! Error type reported by collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollabError {
    /// Translation service could not handle the text.
    #[error("cannot translate {0:?}")]
    Translation(String),
    /// No display name could be derived from the input.
    #[error("no name in {0:?}")]
    NoName(String),
}
