//! Script classification for mixed Thai / Latin report text.

use serde::{Deserialize, Serialize};

/// First code point of the Thai block.
pub const THAI_START: char = '\u{0E00}';
/// Last code point of the Thai block.
pub const THAI_END: char = '\u{0E7F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Thai,
    Other,
}

impl Script {
    pub fn of_char(c: char) -> Self {
        if is_thai_char(c) { Script::Thai } else { Script::Other }
    }

    /// `Thai` as soon as one Thai character is present.
    pub fn of_text(text: &str) -> Self {
        if contains_thai(text) { Script::Thai } else { Script::Other }
    }
}

pub fn is_thai_char(c: char) -> bool {
    (THAI_START..=THAI_END).contains(&c)
}

pub fn contains_thai(text: &str) -> bool {
    text.chars().any(is_thai_char)
}

/// A maximal run of characters sharing one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    pub text: &'a str,
    pub script: Script,
}

/// Partition `text` into alternating Thai / non-Thai runs in a single pass.
///
/// Runs borrow from the input and concatenate back to it exactly.
pub fn script_runs(text: &str) -> Vec<ScriptRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<Script> = None;
    for (idx, c) in text.char_indices() {
        let script = Script::of_char(c);
        match current {
            Some(s) if s == script => {}
            Some(s) => {
                runs.push(ScriptRun { text: &text[start..idx], script: s });
                start = idx;
                current = Some(script);
            }
            None => current = Some(script),
        }
    }
    if let Some(s) = current {
        runs.push(ScriptRun { text: &text[start..], script: s });
    }
    runs
}
