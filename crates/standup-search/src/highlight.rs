use regex::RegexBuilder;

use standup_core::types::Span;

use crate::variants::word_variants;

/// Splits `sentence` into plain and highlighted spans for `word`.
///
/// Every variant of the word is searched case-insensitively; a matched piece
/// is highlighted when it equals a variant ignoring case, or ignoring case and
/// hyphens. Concatenating the span texts gives back `sentence` exactly.
pub fn highlight(sentence: &str, word: &str) -> Vec<Span> {
    let variants = word_variants(word);
    if variants.is_empty() {
        return plain(sentence);
    }
    let pattern = variants.iter().map(|v| regex::escape(v)).collect::<Vec<_>>().join("|");
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(%word, error = %e, "highlight pattern rejected");
            return plain(sentence);
        }
    };
    let folded: Vec<(String, String)> = variants
        .iter()
        .map(|v| {
            let lower = v.to_lowercase();
            let bare = lower.replace('-', "");
            (lower, bare)
        })
        .collect();

    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(sentence) {
        if m.start() > last {
            push_plain(&mut spans, &sentence[last..m.start()]);
        }
        if is_variant(m.as_str(), &folded) {
            spans.push(Span::marked(m.as_str()));
        } else {
            push_plain(&mut spans, m.as_str());
        }
        last = m.end();
    }
    if last < sentence.len() {
        push_plain(&mut spans, &sentence[last..]);
    }
    spans
}

fn plain(sentence: &str) -> Vec<Span> {
    if sentence.is_empty() { Vec::new() } else { vec![Span::plain(sentence)] }
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    match spans.last_mut() {
        Some(prev) if !prev.highlighted => prev.text.push_str(text),
        _ => spans.push(Span::plain(text)),
    }
}

fn is_variant(part: &str, folded: &[(String, String)]) -> bool {
    let lower = part.to_lowercase();
    let bare = lower.replace('-', "");
    folded.iter().any(|(v, v_bare)| *v == lower || *v_bare == bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spans: &[Span]) -> String {
        spans.iter().map(|s| if s.highlighted { format!("[{}]", s.text) } else { s.text.clone() }).collect()
    }

    #[test]
    fn marks_every_case_variant() {
        let spans = highlight("Login flow now works after the LOGIN fix", "login");
        assert_eq!(render(&spans), "[Login] flow now works after the [LOGIN] fix");
    }

    #[test]
    fn hyphenated_word_marks_joined_spelling() {
        let spans = highlight("Rotated the apikey and the API-key", "API-key");
        assert_eq!(render(&spans), "Rotated the [apikey] and the [API-key]");
    }

    #[test]
    fn empty_word_leaves_sentence_alone() {
        assert_eq!(highlight("Nothing here", ""), vec![Span::plain("Nothing here")]);
        assert!(highlight("", "").is_empty());
    }

    #[test]
    fn special_characters_are_literal() {
        assert_eq!(render(&highlight("moved to c++ (x) today", "c++")), "moved to [c++] (x) today");
        assert_eq!(render(&highlight("moved to c++ (x) today", "(x)")), "moved to c++ [(x)] today");
    }
}
