//! HTTP client for the phrase-normalization service
//!
//! One remote call per word, path-encoded. Every lookup degrades to an
//! identity fallback on transport or service failure: the lemma of a word
//! falls back to the word itself, its synonyms to the singleton set. The
//! failure is logged and never reaches the caller.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::config::{self, LOOKUP_TIMEOUT, SYNONYM_DISTANCE_THRESHOLD};
use crate::core::error::{Error, Result};

/// A word must be lowercase alphabetic to be worth a remote call
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z]+$").expect("valid regex"));

/// One ranked synonym candidate: `[term, distance]` on the wire
#[derive(Debug, Deserialize)]
struct RankedTerm(String, f64);

/// Seam between the enrichment pipeline and the lookup service.
///
/// Both operations resolve to some value no matter what; implementations
/// must fold failures into identity fallbacks rather than surface them.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Canonical form of a word
    async fn lemma(&self, word: &str) -> String;

    /// Synonyms of a word, in the service's own ranking order
    async fn synonyms(&self, word: &str) -> Vec<String>;
}

/// Lexicon backed by the remote phrase-normalization service
pub struct LexiconClient {
    client: Client,
    base_url: String,
}

impl LexiconClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    /// Create a client pointed at the URL from `LEXICON_URL`, or the
    /// default local service
    pub fn from_env() -> Self {
        Self::new(&config::Config::lexicon_url())
    }

    async fn fetch_lemma(&self, word: &str) -> Result<String> {
        let url = format!("{}lemma/{}", self.base_url, urlencoding::encode(word));
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(Error::LexiconError {
                message: format!("lemma lookup returned HTTP {}", res.status()),
            });
        }

        // The service answers with a bare JSON string; tolerate plain text
        let body = res.text().await?;
        Ok(serde_json::from_str::<String>(&body).unwrap_or(body))
    }

    async fn fetch_synonyms(&self, word: &str) -> Result<Vec<RankedTerm>> {
        let url = format!("{}synonyms/{}", self.base_url, urlencoding::encode(word));
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(Error::LexiconError {
                message: format!("synonym lookup returned HTTP {}", res.status()),
            });
        }

        Ok(res.json::<Vec<RankedTerm>>().await?)
    }
}

#[async_trait]
impl Lexicon for LexiconClient {
    async fn lemma(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if !WORD_RE.is_match(&word) {
            return word;
        }

        match self.fetch_lemma(&word).await {
            Ok(lemma) => lemma,
            Err(e) => {
                warn!(word = %word, error = %e, "lemma lookup failed, keeping word");
                word
            }
        }
    }

    async fn synonyms(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        if !WORD_RE.is_match(&word) {
            return vec![word];
        }

        match self.fetch_synonyms(&word).await {
            Ok(ranked) => keep_near(ranked),
            Err(e) => {
                warn!(word = %word, error = %e, "synonym lookup failed, keeping word");
                vec![word]
            }
        }
    }
}

/// Keep candidates within the distance threshold, preserving the service's
/// ranking order
fn keep_near(ranked: Vec<RankedTerm>) -> Vec<String> {
    ranked
        .into_iter()
        .filter(|RankedTerm(_, distance)| *distance <= SYNONYM_DISTANCE_THRESHOLD)
        .map(|RankedTerm(term, _)| term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> LexiconClient {
        // Nothing listens here; only the no-remote-call paths may be hit
        LexiconClient::new("http://127.0.0.1:1")
    }

    #[tokio::test]
    async fn invalid_word_lemma_returned_unchanged() {
        let client = offline_client();
        assert_eq!(client.lemma("qu1ck").await, "qu1ck");
        assert_eq!(client.lemma("two words").await, "two words");
    }

    #[tokio::test]
    async fn invalid_word_synonyms_wrapped_as_singleton() {
        let client = offline_client();
        assert_eq!(client.synonyms("fox-trot").await, vec!["fox-trot"]);
    }

    #[test]
    fn distance_threshold_applied_in_service_order() {
        let ranked = vec![
            RankedTerm("engine".into(), 0.4),
            RankedTerm("motor".into(), 1.15),
            RankedTerm("contraption".into(), 1.2),
            RankedTerm("turbine".into(), 0.9),
        ];
        assert_eq!(keep_near(ranked), vec!["engine", "motor", "turbine"]);
    }

    #[test]
    fn ranked_term_decodes_from_pair() {
        let decoded: Vec<RankedTerm> =
            serde_json::from_str(r#"[["engine", 0.5], ["motor", 1.3]]"#).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].0, "engine");
        assert!((decoded[1].1 - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn base_url_normalized_with_trailing_slash() {
        let client = LexiconClient::new("http://localhost:5000");
        assert_eq!(client.base_url, "http://localhost:5000/");
        let client = LexiconClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000/");
    }
}
