//! standup-text
//!
//! Bilingual (English / Thai) tokenizer and word-frequency engine behind the
//! report word cloud. See `frequency` for the entry points and `segment` for
//! the Thai segmentation strategies.

pub mod dictionary;
pub mod frequency;
pub mod segment;
pub mod stopwords;
pub mod surface;
pub mod tokenize;

pub use frequency::{compute_word_frequencies, FrequencyEngine, TokenCounts};
pub use segment::{segmenter_for, DictionarySegmenter};
#[cfg(feature = "icu")]
pub use segment::IcuSegmenter;
pub use stopwords::StopWordSet;
pub use surface::SurfaceForms;
pub use tokenize::{clean_token, Tokenizer};
