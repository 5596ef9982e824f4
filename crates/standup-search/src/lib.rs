//! standup-search
//!
//! Sentence search for a clicked word-cloud term: markdown pre-clean,
//! sentence splitting, variant matching and highlight spans.

pub mod highlight;
pub mod markdown;
pub mod search;
pub mod sentence;
pub mod variants;

pub use highlight::highlight;
pub use markdown::strip_markdown;
pub use search::{find_sentences, find_sentences_in};
pub use sentence::split_sentences;
pub use variants::{word_variants, WordMatcher};
