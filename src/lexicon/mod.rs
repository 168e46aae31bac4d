//! Lemma and synonym lookup

mod client;

pub use client::{Lexicon, LexiconClient};
