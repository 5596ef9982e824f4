use std::collections::HashSet;

use standup_core::config::{AnalysisSettings, SegmenterKind};
use standup_core::script::is_thai_char;
use standup_core::traits::ThaiSegmenter;

use crate::dictionary::thai_dictionary;

/// Longest-match dictionary scan for Thai runs.
///
/// At each position the longest dictionary word (up to `max_word_length`
/// characters) wins. Out-of-vocabulary text is grouped into chunks of at most
/// `max_group_length` Thai characters; single-character chunks are dropped.
/// Every step advances at least one character, so a run of N characters takes
/// at most N * max_word_length lookups.
pub struct DictionarySegmenter {
	dictionary: &'static HashSet<&'static str>,
	max_word_length: usize,
	max_group_length: usize,
}

impl Default for DictionarySegmenter {
	fn default() -> Self {
		let settings = AnalysisSettings::default();
		Self::with_limits(settings.max_word_length, settings.max_group_length)
	}
}

impl DictionarySegmenter {
	pub fn new() -> Self { Self::default() }

	pub fn with_limits(max_word_length: usize, max_group_length: usize) -> Self {
		Self { dictionary: thai_dictionary(), max_word_length: max_word_length.max(1), max_group_length: max_group_length.max(1) }
	}

	/// Longest dictionary word starting at char index `i`, as (chars, byte end).
	fn longest_match(&self, run: &str, bounds: &[usize], i: usize) -> Option<(usize, usize)> {
		let remaining = bounds.len() - 1 - i;
		let longest = self.max_word_length.min(remaining);
		(1..=longest).rev().find(|&len| self.dictionary.contains(&run[bounds[i]..bounds[i + len]])).map(|len| (len, bounds[i + len]))
	}
}

impl ThaiSegmenter for DictionarySegmenter {
	fn name(&self) -> &'static str { "dictionary" }

	fn segment(&self, run: &str) -> Vec<String> {
		let chars: Vec<char> = run.chars().collect();
		let bounds: Vec<usize> = run.char_indices().map(|(idx, _)| idx).chain(std::iter::once(run.len())).collect();
		let n = chars.len();
		let mut tokens = Vec::new();
		let mut i = 0;
		while i < n {
			if let Some((len, end)) = self.longest_match(run, &bounds, i) {
				tokens.push(run[bounds[i]..end].to_string());
				i += len;
				continue;
			}
			if is_thai_char(chars[i]) {
				let mut j = i + 1;
				while j < n && is_thai_char(chars[j]) && j < i + self.max_group_length { j += 1; }
				if j - i > 1 { tokens.push(run[bounds[i]..bounds[j]].to_string()); }
				i = j;
			} else {
				i += 1;
			}
		}
		tokens
	}
}

/// Locale-aware Thai word breaking backed by ICU4X compiled data.
///
/// Keeps segments longer than one character after trimming that are either
/// word-like or carry Thai characters; the last segment of a Thai run does
/// not report itself as word-like.
#[cfg(feature = "icu")]
pub struct IcuSegmenter {
	inner: icu_segmenter::WordSegmenter,
}

#[cfg(feature = "icu")]
impl Default for IcuSegmenter {
	fn default() -> Self { Self { inner: icu_segmenter::WordSegmenter::new_auto() } }
}

#[cfg(feature = "icu")]
impl IcuSegmenter {
	pub fn new() -> Self { Self::default() }
}

#[cfg(feature = "icu")]
impl ThaiSegmenter for IcuSegmenter {
	fn name(&self) -> &'static str { "icu" }

	fn segment(&self, run: &str) -> Vec<String> {
		let mut words = Vec::new();
		let mut breaks = self.inner.segment_str(run);
		let mut last = 0;
		while let Some(pos) = breaks.next() {
			if pos > last {
				let segment = &run[last..pos];
				let keep = breaks.is_word_like() || segment.chars().any(is_thai_char);
				if keep && segment.trim().chars().count() > 1 { words.push(segment.trim().to_string()); }
			}
			last = pos;
		}
		words
	}
}

/// Pick the Thai segmentation strategy once, at engine construction.
pub fn segmenter_for(settings: &AnalysisSettings) -> Box<dyn ThaiSegmenter> {
	match settings.segmenter {
		SegmenterKind::Dictionary => Box::new(DictionarySegmenter::with_limits(settings.max_word_length, settings.max_group_length)),
		SegmenterKind::Native | SegmenterKind::Auto => native_segmenter(settings),
	}
}

#[cfg(feature = "icu")]
fn native_segmenter(_settings: &AnalysisSettings) -> Box<dyn ThaiSegmenter> {
	tracing::debug!("using ICU word segmenter for Thai");
	Box::new(IcuSegmenter::new())
}

#[cfg(not(feature = "icu"))]
fn native_segmenter(settings: &AnalysisSettings) -> Box<dyn ThaiSegmenter> {
	if settings.segmenter == SegmenterKind::Native {
		tracing::warn!("native Thai segmenter requested but the `icu` feature is disabled; falling back to dictionary segmentation");
	} else {
		tracing::debug!("no native Thai segmenter compiled in; using dictionary segmentation");
	}
	Box::new(DictionarySegmenter::with_limits(settings.max_word_length, settings.max_group_length))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn longest_match_prefers_longer_entries() {
		// "การพัฒนา" is in the dictionary and must beat "การ" + "พัฒนา"
		let seg = DictionarySegmenter::new();
		assert_eq!(seg.segment("การพัฒนา"), vec!["การพัฒนา"]);
	}

	#[test]
	fn out_of_vocabulary_groups_of_five() {
		let seg = DictionarySegmenter::new();
		// บริการ is not in the dictionary: 5 chars grouped, the lone trailing char dropped
		assert_eq!(seg.segment("บริการ"), vec!["บริกา"]);
	}

	#[test]
	fn non_thai_characters_advance_by_one() {
		let seg = DictionarySegmenter::new();
		assert_eq!(seg.segment("x-ทีม"), vec!["ทีม"]);
		assert!(seg.segment("abc").is_empty());
	}

	#[test]
	fn group_length_is_configurable() {
		let seg = DictionarySegmenter::with_limits(10, 2);
		// combining vowels are still Thai characters, so they start groups too
		assert_eq!(seg.segment("บริการ"), vec!["บร", "ิก", "าร"]);
	}

	#[cfg(feature = "icu")]
	#[test]
	fn icu_keeps_single_word_runs() {
		let seg = IcuSegmenter::new();
		for word in ["รุ่น", "บริการ", "ระบบ"] {
			assert_eq!(seg.segment(word), vec![word], "{word} dropped");
		}
	}

	#[cfg(feature = "icu")]
	#[test]
	fn icu_splits_multi_word_runs_into_slices() {
		let run = "ทีมวิศวกรรมพัฒนาระบบเสร็จแล้ว";
		let words = IcuSegmenter::new().segment(run);
		assert!(words.len() > 1);
		assert!(words.iter().all(|w| run.contains(w.as_str()) && w.chars().count() > 1));
	}

	#[test]
	fn auto_selects_native_when_compiled_in() {
		let seg = segmenter_for(&AnalysisSettings::default());
		let expected = if cfg!(feature = "icu") { "icu" } else { "dictionary" };
		assert_eq!(seg.name(), expected);
		assert_eq!(seg.segment("ระบบ"), vec!["ระบบ"]);
	}
}
