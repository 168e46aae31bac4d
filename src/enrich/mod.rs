//! Query enrichment pipeline
//!
//! Turns a raw free-text query into a boolean expression that broadens the
//! search: keywords are extracted and deduplicated, stop words dropped,
//! each keyword lemmatized, each lemma expanded into a synonym group, and
//! the groups rendered as `((a OR b) AND (c OR d))`.
//!
//! Enrichment never fails. Every lookup degrades to an identity fallback
//! inside the lexicon client, so with the service unreachable the result is
//! the deduplicated keyword list, one singleton group per keyword.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::runner::run_sequential;
use crate::terms;

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]+").expect("valid regex"));

/// Query enrichment over a lexicon
pub struct Enricher<L> {
    lexicon: L,
}

impl<L: Lexicon> Enricher<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    /// Expand `raw_query` into a boolean expression of synonym groups.
    ///
    /// Always returns a string; an empty query yields `"()"`.
    pub async fn enrich(&self, raw_query: &str) -> String {
        let keywords: Vec<String> = extract_keywords(raw_query)
            .into_iter()
            .filter(|kw| !terms::is_generic(kw))
            .collect();
        debug!(count = keywords.len(), "keywords after stop-word filter");

        let lemmas = self.lemmatize(keywords).await;
        let groups = self.expand(lemmas).await;
        serialize(&groups)
    }

    /// One lemma per keyword, order-preserving: `lemmas[i]` corresponds to
    /// `keywords[i]`, which is why this must stay a sequential run.
    async fn lemmatize(&self, keywords: Vec<String>) -> Vec<String> {
        run_sequential(keywords, |kw| async move { self.lexicon.lemma(&kw).await }).await
    }

    /// One synonym group per lemma, in lemma order.
    ///
    /// The used-terms set lives only for this call and is passed into each
    /// stage invocation; the run is strictly sequential, so the
    /// check-then-set per group is already serialized. The lock is there
    /// for the seam: a future bounded-concurrency expansion must keep the
    /// whole filter-and-mark step one critical section per group or a
    /// synonym's second occurrence could survive.
    async fn expand(&self, lemmas: Vec<String>) -> Vec<Vec<String>> {
        let used: Mutex<HashSet<String>> = Mutex::new(HashSet::new());
        run_sequential(lemmas, |lemma| self.expand_one(lemma, &used)).await
    }

    async fn expand_one(&self, lemma: String, used: &Mutex<HashSet<String>>) -> Vec<String> {
        // Defensive re-lemmatization before the synonym call
        let lemma = self.lexicon.lemma(&lemma).await;
        let candidates = self.lexicon.synonyms(&lemma).await;

        let mut used = used.lock();
        let group: Vec<String> = candidates
            .into_iter()
            .filter(|term| !used.contains(term) && !terms::is_generic(term))
            .collect();
        for term in &group {
            used.insert(term.clone());
        }
        group
    }
}

/// Lowercase the query and pull out every maximal alphabetic run,
/// deduplicated in first-occurrence order
fn extract_keywords(raw_query: &str) -> Vec<String> {
    let query = raw_query.to_lowercase();
    let mut seen = HashSet::new();
    KEYWORD_RE
        .find_iter(&query)
        .map(|m| m.as_str().to_string())
        .filter(|kw| seen.insert(kw.clone()))
        .collect()
}

/// Render groups as `((a OR b) AND (c))`.
///
/// An empty group renders as an empty string but still takes part in the
/// ` AND ` join, exactly like the upstream serializer. Consumers expecting
/// that shape depend on it; do not elide empty groups here.
fn serialize(groups: &[Vec<String>]) -> String {
    let subqueries: Vec<String> = groups
        .iter()
        .map(|group| {
            if group.is_empty() {
                String::new()
            } else {
                format!("({})", group.join(" OR "))
            }
        })
        .collect();
    format!("({})", subqueries.join(" AND "))
}
