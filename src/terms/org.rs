//! Organization-name cleanup
//!
//! Assignee names come in with legal boilerplate attached ("Acme
//! Corporation Ltd"); `clean` strips the trailing suffix tokens and caps
//! the result at a display-friendly length.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::config::MAX_CLEAN_LEN;

#[rustfmt::skip]
const ORG_SUFFIXES: &[&str] = &[
    "l", "p", "m", "n", "v", "oy", "sa", "kabushiki", "kaisha", "limited",
    "publ", "inc", "incorporated", "corp", "corporation", "co", "ltd", "llc",
    "nv", "gmbh", "services", "ag", "bv", "pvt", "pte", "pty", "electronics",
    "licensing", "holding", "holdings", "technologies", "products",
    "beijing", "and", "patent",
];

static ORG_SUFFIX_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ORG_SUFFIXES.iter().copied().collect());

static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid regex"));

static UNIVERSITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(univ|university|inst|institute)\b").expect("valid regex"));

/// Strip trailing legal/organizational suffix tokens from a name.
///
/// Tokens are popped from the right while they match the suffix table and
/// more than one token remains, so a name that is nothing but a suffix
/// survives intact. The result is rejoined with single spaces and never
/// exceeds [`MAX_CLEAN_LEN`] characters, truncated at a word boundary from
/// the right.
pub fn clean(name: &str) -> String {
    let mut tokens: Vec<&str> = TOKEN_SPLIT
        .split(name.trim())
        .filter(|t| !t.is_empty())
        .collect();

    while tokens.len() > 1 {
        let last = tokens[tokens.len() - 1].to_lowercase();
        if ORG_SUFFIX_SET.contains(last.as_str()) {
            tokens.pop();
        } else {
            break;
        }
    }

    truncate_at_word(tokens.join(" "))
}

/// True if the name looks like an academic institution
pub fn is_university(name: &str) -> bool {
    UNIVERSITY_RE.is_match(name)
}

fn truncate_at_word(mut name: String) -> String {
    while name.chars().count() > MAX_CLEAN_LEN {
        match name.rfind(' ') {
            Some(idx) => name.truncate(idx),
            None => {
                // One giant token, no boundary left to cut at
                name = name.chars().take(MAX_CLEAN_LEN).collect();
            }
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_suffixes() {
        assert_eq!(clean("Acme Corporation Ltd"), "Acme");
        assert_eq!(clean("Sony Corp."), "Sony");
        assert_eq!(clean("Siemens AG"), "Siemens");
    }

    #[test]
    fn keeps_interior_tokens() {
        assert_eq!(
            clean("Hewlett-Packard Development Company, L.P."),
            "Hewlett Packard Development Company"
        );
    }

    #[test]
    fn single_suffix_token_survives() {
        assert_eq!(clean("Corp"), "Corp");
    }

    #[test]
    fn long_names_truncate_at_word_boundary() {
        let name = "Microelectronic Fabrication Equipment Maintenance Automation Systems Company";
        let cleaned = clean(name);
        assert!(cleaned.len() <= MAX_CLEAN_LEN);
        assert!(name.starts_with(&cleaned));
        assert_eq!(
            cleaned,
            "Microelectronic Fabrication Equipment Maintenance Automation"
        );
    }

    #[test]
    fn untruncatable_token_is_hard_capped() {
        let name = "x".repeat(200);
        assert_eq!(clean(&name).len(), MAX_CLEAN_LEN);
    }

    #[test]
    fn university_detection() {
        assert!(is_university("Stanford University"));
        assert!(is_university("Massachusetts Inst of Technology"));
        assert!(!is_university("Universal Pictures"));
    }
}
