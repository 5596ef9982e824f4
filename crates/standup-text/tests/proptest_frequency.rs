//! Property-based tests for the tokenizer and frequency engine.

use proptest::prelude::*;

use standup_core::config::{AnalysisSettings, SegmenterKind};
use standup_core::traits::ThaiSegmenter;
use standup_core::types::StopWordFilter;
use standup_text::stopwords::{ENGLISH_STOP_WORDS, THAI_STOP_WORDS};
use standup_text::{DictionarySegmenter, FrequencyEngine, StopWordSet};

fn engine() -> FrequencyEngine {
    FrequencyEngine::new(AnalysisSettings { segmenter: SegmenterKind::Dictionary, ..AnalysisSettings::default() })
}

fn filter() -> impl Strategy<Value = StopWordFilter> {
    prop_oneof![Just(StopWordFilter::English), Just(StopWordFilter::Thai), Just(StopWordFilter::Any)]
}

/// Words drawn from both stop lists and some report vocabulary.
fn report_word() -> impl Strategy<Value = String> {
    let pool: Vec<String> = ENGLISH_STOP_WORDS
        .iter()
        .chain(THAI_STOP_WORDS)
        .chain(["deploy", "API-key", "Login.", "ระบบ", "ทดสอบ", "42", "ทีมงาน"].iter())
        .map(|w| w.to_string())
        .collect();
    prop::sample::select(pool)
}

proptest! {
    /// Property: identical input gives identical ordered output
    #[test]
    fn frequencies_are_idempotent(text in "[a-zA-Z ,.\\x{0E01}-\\x{0E4E}]{0,200}", mode in filter()) {
        let e = engine();
        prop_assert_eq!(e.word_frequencies(&text, mode), e.word_frequencies(&text, mode));
    }

    /// Property: no entry is a member of the active stop-word set
    #[test]
    fn stop_words_are_excluded(words in prop::collection::vec(report_word(), 0..60), mode in filter()) {
        let text = words.join(" ");
        let stop = StopWordSet::for_filter(mode);
        for entry in engine().word_frequencies(&text, mode) {
            prop_assert!(!stop.contains(&entry.text), "stop word {} leaked", entry.text);
        }
    }

    /// Property: never more than 100 entries, sorted descending, unique
    #[test]
    fn output_is_bounded_sorted_and_unique(words in prop::collection::vec("[a-z]{2,6}", 0..400)) {
        let result = engine().word_frequencies(&words.join(" "), StopWordFilter::English);
        prop_assert!(result.len() <= 100);
        prop_assert!(result.windows(2).all(|w| w[0].value >= w[1].value));
        let mut texts: Vec<&str> = result.iter().map(|e| e.text.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        prop_assert_eq!(texts.len(), result.len());
    }

    /// Property: the dictionary scan terminates and only emits slices of its input
    #[test]
    fn dictionary_scan_makes_progress(run in "[\\x{0E00}-\\x{0E7F}]{0,300}") {
        let seg = DictionarySegmenter::new();
        let tokens = seg.segment(&run);
        let emitted: usize = tokens.iter().map(|t| t.chars().count()).sum();
        prop_assert!(emitted <= run.chars().count());
        for t in &tokens {
            prop_assert!(!t.is_empty());
            prop_assert!(t.chars().count() <= 10);
            prop_assert!(run.contains(t.as_str()));
        }
    }
}
