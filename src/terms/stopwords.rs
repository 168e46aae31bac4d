//! Generic-word classification
//!
//! Patent prose is full of boilerplate terms that carry no discriminative
//! search value; the table below is the fixed list used to drop them. Exact,
//! case-sensitive membership only, no stemming.

use once_cell::sync::Lazy;
use std::collections::HashSet;

#[rustfmt::skip]
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "accompanying", "accomplish", "accomplished",
    "accomplishes", "accomplishing", "accordance", "according", "accordingly",
    "achieve", "achieved", "achievement", "achieves", "achieving",
    "additionally", "advantage", "advantageous", "advantageously",
    "advantages", "after", "all", "along", "also", "although", "among", "an",
    "and", "and/or", "any", "are", "art", "as", "aspect", "aspects", "assume",
    "assumed", "assumes", "assuming", "assumption", "assumptions", "at",
    "basis", "be", "because", "been", "being", "below", "but", "by", "can",
    "cause", "caused", "causes", "causing", "certain", "comprise",
    "comprised", "comprises", "comprising", "could", "currently", "describe",
    "described", "describes", "description", "desired", "detail", "detailed",
    "detailing", "details", "disclose", "disclosed", "discloses",
    "disclosing", "discuss", "discussed", "discussion", "do", "does", "e.g",
    "either", "embodied", "embodiment", "embodiments", "embody", "etc",
    "example", "exemplary", "fig", "figure", "figures", "first", "for",
    "from", "function", "functionality", "functioning", "functions",
    "further", "general", "given", "has", "have", "having", "hereafter",
    "herein", "hereinafter", "how", "however", "i.e", "if", "illustrate",
    "illustrated", "illustrates", "illustration", "implement",
    "implementation", "implemented", "implementing", "implements", "in",
    "include", "included", "includes", "including", "information", "input",
    "into", "invent", "invented", "invention", "inventions", "inventors",
    "invents", "is", "it", "its", "known", "made", "main", "make", "makes",
    "making", "manner", "may", "means", "method", "methods", "might", "must",
    "noted", "occur", "occurred", "occurring", "occurs", "of", "on", "one",
    "or", "ought", "over", "particular", "perhaps", "plural", "plurality",
    "possible", "possibly", "present", "presently", "prior", "provide",
    "provided", "provides", "providing", "purpose", "purposed", "purposes",
    "regard", "relate", "related", "relates", "relating", "said", "should",
    "shown", "similar", "since", "skill", "skilled", "so", "some", "step",
    "steps", "such", "suitable", "taught", "teach", "teaches", "teaching",
    "that", "the", "their", "them", "then", "there", "thereafter", "thereby",
    "therefore", "therefrom", "therein", "thereof", "thereon", "these",
    "they", "third", "this", "those", "though", "through", "thus", "to",
    "under", "until", "upon", "use", "used", "uses", "using", "utilizes",
    "various", "very", "was", "we", "well", "when", "where", "whereby",
    "wherein", "whether", "which", "while", "will", "with", "within",
    "would", "yet",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// True if `word` is a generic/stop word
pub fn is_generic(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_are_generic() {
        assert!(is_generic("the"));
        assert!(is_generic("wherein"));
        assert!(is_generic("and/or"));
    }

    #[test]
    fn content_words_are_not() {
        assert!(!is_generic("turbine"));
        assert!(!is_generic("engine"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_generic("The"));
    }
}
