use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use standup_core::script::contains_thai;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\x{0E00}-\x{0E7F}]").expect("valid regex"));

/// Spellings of `word` worth looking for: as given, lower, upper, stripped of
/// punctuation, punctuation turned into hyphens, and hyphens removed.
/// Empty forms are dropped; the first occurrence of a duplicate wins.
pub fn word_variants(word: &str) -> Vec<String> {
    let candidates = [
        word.to_string(),
        word.to_lowercase(),
        word.to_uppercase(),
        NON_WORD.replace_all(word, "").into_owned(),
        NON_WORD.replace_all(word, "-").into_owned(),
        word.replace('-', ""),
    ];
    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// Pattern for a non-Thai variant: each hyphen-separated piece escaped, the
/// hyphens made optional, the whole bounded by word boundaries.
fn variant_pattern(variant: &str) -> Option<String> {
    if variant.chars().all(|c| c == '-') {
        return None;
    }
    let body = variant.split('-').map(regex::escape).collect::<Vec<_>>().join("-?");
    Some(format!(r"\b{body}\b"))
}

/// Decides whether a sentence mentions a word in any of its spellings.
///
/// A sentence matches if it contains the word case-insensitively, if a Thai
/// variant occurs in it as a substring, or if a non-Thai variant matches with
/// optional hyphens at word boundaries. So `API-key` finds both `apikey` and
/// `api-key`, but never `api key`.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    lowered: String,
    thai: Vec<String>,
    latin: Vec<Regex>,
}

impl WordMatcher {
    /// `None` for a blank word.
    pub fn new(word: &str) -> Option<Self> {
        if word.trim().is_empty() {
            return None;
        }
        let mut thai = Vec::new();
        let mut latin = Vec::new();
        for variant in word_variants(word) {
            if contains_thai(&variant) {
                thai.push(variant.to_lowercase());
                continue;
            }
            let Some(pattern) = variant_pattern(&variant) else { continue };
            match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(re) => latin.push(re),
                Err(e) => tracing::warn!(%variant, error = %e, "skipping unmatchable variant"),
            }
        }
        Some(Self { lowered: word.to_lowercase(), thai, latin })
    }

    pub fn matches(&self, sentence: &str) -> bool {
        let lowered = sentence.to_lowercase();
        lowered.contains(&self.lowered)
            || self.thai.iter().any(|v| lowered.contains(v.as_str()))
            || self.latin.iter().any(|re| re.is_match(sentence))
    }
}
