use standup_core::types::{SentenceMatch, TextSource};

use crate::markdown::strip_markdown;
use crate::sentence::split_sentences;
use crate::variants::WordMatcher;

/// Sentences across `sources` that mention `word`, in source order and then
/// document order, each tagged with its source label. Blank sources are
/// skipped; a blank word finds nothing.
#[tracing::instrument(skip_all, fields(sources = sources.len(), word = %word))]
pub fn find_sentences(sources: &[TextSource], word: &str) -> Vec<SentenceMatch> {
    let Some(matcher) = WordMatcher::new(word) else { return Vec::new() };
    let mut matches = Vec::new();
    for source in sources.iter().filter(|s| !s.text.trim().is_empty()) {
        collect_matches(&matcher, &source.text, &source.label, &mut matches);
    }
    tracing::debug!(found = matches.len(), "sentence search done");
    matches
}

/// Single-text form of [`find_sentences`].
pub fn find_sentences_in(text: &str, label: &str, word: &str) -> Vec<SentenceMatch> {
    let Some(matcher) = WordMatcher::new(word) else { return Vec::new() };
    let mut matches = Vec::new();
    if !text.trim().is_empty() {
        collect_matches(&matcher, text, label, &mut matches);
    }
    matches
}

fn collect_matches(matcher: &WordMatcher, text: &str, label: &str, out: &mut Vec<SentenceMatch>) {
    let cleaned = strip_markdown(text);
    for sentence in split_sentences(&cleaned) {
        if matcher.matches(sentence) {
            out.push(SentenceMatch { sentence: sentence.to_string(), source: label.to_string() });
        }
    }
}
