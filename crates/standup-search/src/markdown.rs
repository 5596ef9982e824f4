use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));

/// Drop `**bold**` / `*italic*` markers (keeping their content) and `---`
/// rules, then trim. Emphasis never spans lines.
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = BOLD.replace_all(text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    text.replace("---", "").trim().to_string()
}
