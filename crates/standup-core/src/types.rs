//! Domain types shared by the frequency and sentence-search engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::script::Script;

/// Which stop-word list applies, and which sub-tokenizers run.
///
/// - `English`: whitespace tokenizer over non-Thai text, English stop words
/// - `Thai`: Thai segmenter over Thai runs, Thai stop words
/// - `Any`: both tokenizers, union of both lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordFilter {
    English,
    Thai,
    #[default]
    Any,
}

impl StopWordFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StopWordFilter::English => "english",
            StopWordFilter::Thai => "thai",
            StopWordFilter::Any => "any",
        }
    }

    pub fn tokenizes_latin(self) -> bool {
        matches!(self, StopWordFilter::English | StopWordFilter::Any)
    }

    pub fn tokenizes_thai(self) -> bool {
        matches!(self, StopWordFilter::Thai | StopWordFilter::Any)
    }
}

impl fmt::Display for StopWordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopWordFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(StopWordFilter::English),
            "thai" => Ok(StopWordFilter::Thai),
            "any" => Ok(StopWordFilter::Any),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}

/// The report section a cloud word is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordSource {
    Progress,
    Blockers,
    NextSteps,
    #[default]
    Default,
}

impl WordSource {
    /// Higher wins when a word appears in several sections.
    /// Blockers rank first since they are the most salient in the cloud.
    pub fn priority(self) -> u8 {
        match self {
            WordSource::Blockers => 3,
            WordSource::NextSteps => 2,
            WordSource::Progress => 1,
            WordSource::Default => 0,
        }
    }
}

/// One word-cloud entry. `text` is the normalized token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyEntry {
    pub text: String,
    pub value: u32,
    #[serde(default)]
    pub source: WordSource,
}

impl WordFrequencyEntry {
    pub fn new(text: impl Into<String>, value: u32) -> Self {
        Self { text: text.into(), value, source: WordSource::Default }
    }

    pub fn with_source(mut self, source: WordSource) -> Self {
        self.source = source;
        self
    }
}

/// A cleaned word unit.
///
/// - `surface`: the raw token as it appeared in the source text
/// - `normalized`: punctuation stripped, lowercased unless Thai
/// - `script`: `Thai` when the normalized form carries Thai characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub script: Script,
}

/// A labeled block of text to search, e.g. the blockers section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSource {
    pub text: String,
    pub label: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self { text: text.into(), label: label.into() }
    }
}

/// A sentence containing the searched word, tagged with its source label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceMatch {
    pub sentence: String,
    pub source: String,
}

/// One run of a highlighted sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), highlighted: false }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self { text: text.into(), highlighted: true }
    }
}
