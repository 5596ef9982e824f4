use standup_core::types::{SentenceMatch, Span, TextSource};
use standup_search::{find_sentences, find_sentences_in, highlight};

fn sentences(found: &[SentenceMatch]) -> Vec<&str> {
    found.iter().map(|m| m.sentence.as_str()).collect()
}

#[test]
fn finds_every_sentence_mentioning_the_word() {
    let sources = [TextSource::new("Fixed the login bug today. Login flow now works.", "Progress")];
    let found = find_sentences(&sources, "login");
    assert_eq!(sentences(&found), vec!["Fixed the login bug today", "Login flow now works"]);
    assert!(found.iter().all(|m| m.source == "Progress"));
}

#[test]
fn markdown_is_cleaned_before_matching() {
    let sources = [
        TextSource::new("", "Progress"),
        TextSource::new("**Blocked** on API access", "Blockers"),
    ];
    let found = find_sentences(&sources, "blocked");
    assert_eq!(found, vec![SentenceMatch { sentence: "Blocked on API access".into(), source: "Blockers".into() }]);
}

#[test]
fn matches_keep_source_then_document_order() {
    let sources = [
        TextSource::new("Deploy the API. Nothing else", "Progress"),
        TextSource::new("   ", "Blockers"),
        TextSource::new("API quota hit\nWaiting on the api team", "Next Steps"),
    ];
    let found = find_sentences(&sources, "API");
    let labelled: Vec<(&str, &str)> = found.iter().map(|m| (m.source.as_str(), m.sentence.as_str())).collect();
    assert_eq!(
        labelled,
        vec![("Progress", "Deploy the API"), ("Next Steps", "API quota hit"), ("Next Steps", "Waiting on the api team")]
    );
}

#[test]
fn empty_inputs_find_nothing() {
    assert!(find_sentences(&[], "login").is_empty());
    assert!(find_sentences(&[TextSource::new("login works", "Progress")], "").is_empty());
    assert!(find_sentences_in("", "Report", "login").is_empty());
}

#[test]
fn hyphenation_variants_are_symmetric() {
    let text = "Rotated the apikey. Shared the api-key. Asked for an api key";
    assert_eq!(
        sentences(&find_sentences_in(text, "Report", "API-key")),
        vec!["Rotated the apikey", "Shared the api-key"]
    );
    assert_eq!(sentences(&find_sentences_in(text, "Report", "APIkey")), vec!["Rotated the apikey"]);
}

#[test]
fn thai_text_splits_on_wide_gaps() {
    let found = find_sentences_in("ทดสอบระบบใหม่  แก้ไขปัญหาเข้าสู่ระบบ  ประชุมทีม", "Progress", "ระบบ");
    assert_eq!(sentences(&found), vec!["ทดสอบระบบใหม่", "แก้ไขปัญหาเข้าสู่ระบบ"]);
}

#[test]
fn regex_special_words_do_not_panic() {
    let text = "Moved the parser to c++. Fixed f(x) edge case. Bumped [deps]";
    assert_eq!(sentences(&find_sentences_in(text, "Report", "c++")), vec!["Moved the parser to c++"]);
    assert_eq!(sentences(&find_sentences_in(text, "Report", "f(x)")), vec!["Fixed f(x) edge case"]);
    for word in ["[", "(", "*", "\\", "$^", "-", "?"] {
        let _ = find_sentences_in(text, "Report", word);
        let _ = highlight(text, word);
    }
}

#[test]
fn highlight_marks_matches_in_found_sentences() {
    let spans = highlight("Blocked on API access", "api");
    assert_eq!(spans, vec![Span::plain("Blocked on "), Span::marked("API"), Span::plain(" access")]);
}

#[test]
fn bold_markers_are_stripped_from_the_match() {
    let sources = [
        TextSource::new("**Blocked** on API access", "Blockers"),
        TextSource::new("No issues", "Progress"),
    ];
    assert_eq!(
        find_sentences(&sources, "API"),
        vec![SentenceMatch { sentence: "Blocked on API access".into(), source: "Blockers".into() }]
    );
}
