//! Configuration knobs and their documented defaults

use std::time::Duration;

/// Synonym candidates farther than this from the query lemma are dropped
pub const SYNONYM_DISTANCE_THRESHOLD: f64 = 1.15;

/// Default ceiling for in-flight operations in a bounded batch run
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Transport-level timeout for a single lookup call
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Cleaned organization names are truncated to this many characters
pub const MAX_CLEAN_LEN: usize = 60;

/// Default base URL of the lemma/synonym service
pub const DEFAULT_LEXICON_URL: &str = "http://127.0.0.1:5000/";

pub struct Config;

impl Config {
    /// Base URL of the lexicon service, overridable via `LEXICON_URL`
    pub fn lexicon_url() -> String {
        std::env::var("LEXICON_URL").unwrap_or_else(|_| DEFAULT_LEXICON_URL.to_string())
    }
}
