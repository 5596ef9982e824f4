use once_cell::sync::Lazy;
use regex::Regex;

use standup_core::script::contains_thai;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?।\n]+").expect("valid regex"));
// Thai rarely ends sentences with punctuation; wide gaps stand in for it.
static THAI_SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?।\n]+|\s{2,}").expect("valid regex"));

/// Split `text` into trimmed, non-empty sentences in document order.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let splitter = if contains_thai(text) { &*THAI_SENTENCE_BREAK } else { &*SENTENCE_BREAK };
    splitter.split(text).map(str::trim).filter(|s| !s.is_empty()).collect()
}
