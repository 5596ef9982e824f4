use indexmap::IndexMap;
use once_cell::sync::Lazy;

use standup_core::config::{AnalysisSettings, Config};
use standup_core::traits::ThaiSegmenter;
use standup_core::types::{StopWordFilter, WordFrequencyEntry};
use standup_core::Result;

use crate::segment::segmenter_for;
use crate::stopwords::StopWordSet;
use crate::tokenize::Tokenizer;

static DEFAULT_ENGINE: Lazy<FrequencyEngine> = Lazy::new(|| FrequencyEngine::new(AnalysisSettings::default()));

/// Ranked word frequencies for `text` under the default engine.
pub fn compute_word_frequencies(text: &str, filter: StopWordFilter) -> Vec<WordFrequencyEntry> {
	DEFAULT_ENGINE.word_frequencies(text, filter)
}

/// Token counts in first-seen order.
///
/// Insertion order is kept so that ranking with a stable sort breaks ties by
/// first appearance.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
	counts: IndexMap<String, u32>,
}

impl TokenCounts {
	pub fn new() -> Self { Self::default() }

	pub fn add(&mut self, token: &str) -> &mut Self { self.add_n(token, 1) }

	pub fn add_n(&mut self, token: &str, n: u32) -> &mut Self {
		match self.counts.get_mut(token) {
			Some(count) => *count += n,
			None => { self.counts.insert(token.to_string(), n); }
		}
		self
	}

	pub fn get(&self, token: &str) -> u32 { self.counts.get(token).copied().unwrap_or(0) }

	pub fn len(&self) -> usize { self.counts.len() }

	pub fn is_empty(&self) -> bool { self.counts.is_empty() }

	pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> { self.counts.iter().map(|(t, &c)| (t.as_str(), c)) }

	/// Descending by count, ties in first-seen order, at most `top_n` entries.
	pub fn ranked(self, top_n: usize) -> Vec<WordFrequencyEntry> {
		let mut entries: Vec<WordFrequencyEntry> = self.counts.into_iter().map(|(text, value)| WordFrequencyEntry::new(text, value)).collect();
		entries.sort_by(|a, b| b.value.cmp(&a.value));
		entries.truncate(top_n);
		entries
	}
}

/// Tokenizer plus stop-word filtering and ranking.
pub struct FrequencyEngine {
	tokenizer: Tokenizer,
	settings: AnalysisSettings,
}

impl FrequencyEngine {
	pub fn new(settings: AnalysisSettings) -> Self {
		let segmenter = segmenter_for(&settings);
		Self::with_segmenter(settings, segmenter)
	}

	pub fn with_segmenter(settings: AnalysisSettings, segmenter: Box<dyn ThaiSegmenter>) -> Self {
		tracing::debug!(segmenter = segmenter.name(), top_n = settings.top_n, "frequency engine ready");
		Self { tokenizer: Tokenizer::new(segmenter), settings }
	}

	pub fn from_config(config: &Config) -> Result<Self> {
		Ok(Self::new(config.analysis()?))
	}

	pub fn settings(&self) -> &AnalysisSettings { &self.settings }

	pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

	/// Counts of significant tokens, before ranking.
	pub fn count(&self, text: &str, filter: StopWordFilter) -> TokenCounts {
		let mut counts = TokenCounts::new();
		if text.trim().is_empty() { return counts; }
		let stop_words = StopWordSet::for_filter(filter);
		for token in self.tokenizer.tokenize(text, filter) {
			if self.is_significant(&token.normalized, stop_words) { counts.add(&token.normalized); }
		}
		counts
	}

	#[tracing::instrument(skip_all, fields(text_len = text.len(), filter = %filter))]
	pub fn word_frequencies(&self, text: &str, filter: StopWordFilter) -> Vec<WordFrequencyEntry> {
		let counts = self.count(text, filter);
		tracing::debug!(unique = counts.len(), "counted tokens");
		counts.ranked(self.settings.top_n)
	}

	fn is_significant(&self, word: &str, stop_words: &StopWordSet) -> bool {
		word.chars().count() >= self.settings.min_token_chars
			&& !word.chars().all(|c| c.is_ascii_digit())
			&& !stop_words.contains(word)
	}
}
