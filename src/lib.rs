//! Broaden - boolean query enrichment
//!
//! Expands a free-text search query into a boolean expression of synonym
//! groups, `((a OR b) AND (c OR d))`, using an external lemma/synonym
//! service. Built around a small async task runner that sequences or
//! bounds concurrent lookups; every external failure degrades to an
//! identity fallback, so enrichment always produces a query string.

pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod lexicon;
pub mod runner;
pub mod terms;

pub use crate::core::error::{Error, Result};
pub use enrich::Enricher;
pub use lexicon::{Lexicon, LexiconClient};
