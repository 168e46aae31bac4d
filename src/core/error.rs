//! Error types for Broaden

use thiserror::Error;

/// Result type alias using Broaden's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Broaden error types
///
/// Lookup failures are recovered inside the lexicon client and never reach
/// the enrichment pipeline's callers; these variants exist for the internal
/// transport path.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Lexicon service error: {message}")]
    LexiconError { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
