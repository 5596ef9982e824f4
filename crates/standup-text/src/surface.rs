use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::tokenize::clean_token;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"[\w\x{0E00}-\x{0E7F}]+-?[\w\x{0E00}-\x{0E7F}]+|[\w\x{0E00}-\x{0E7F}]+").expect("valid regex")
});
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Maps normalized cloud words back to the spelling used in the report.
///
/// Cloud entries are lowercased and stripped of punctuation, but the sentence
/// search should look for the form the author actually typed (`API-key`, not
/// `apikey`). Later occurrences overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SurfaceForms {
	forms: HashMap<String, String>,
}

impl SurfaceForms {
	pub fn from_texts<I, S>(texts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let joined = texts.into_iter().filter(|t| !t.as_ref().trim().is_empty()).map(|t| t.as_ref().to_string()).collect::<Vec<_>>().join(" ");
		let combined = WHITESPACE.replace_all(&joined, " ");
		let mut forms = HashMap::new();
		for m in WORD_PATTERN.find_iter(combined.trim()) {
			let word = m.as_str();
			let normalized = word.to_lowercase();
			// keyed exactly like the cloud words the tokenizer produces
			let stripped = clean_token(word);
			if !stripped.is_empty() && stripped != normalized { forms.insert(stripped, word.to_string()); }
			forms.insert(normalized, word.to_string());
		}
		Self { forms }
	}

	/// The recorded surface form for `word`, or `word` itself.
	pub fn resolve<'a>(&'a self, word: &'a str) -> &'a str {
		self.forms.get(&word.to_lowercase()).map(String::as_str).unwrap_or(word)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_hyphenated_and_cased_forms() {
		let forms = SurfaceForms::from_texts(["Rotated the API-key", "", "Fixed Login flow"]);
		assert_eq!(forms.resolve("apikey"), "API-key");
		assert_eq!(forms.resolve("api-key"), "API-key");
		assert_eq!(forms.resolve("login"), "Login");
		assert_eq!(forms.resolve("unknown"), "unknown");
	}

	#[test]
	fn non_ascii_letters_key_like_cloud_words() {
		let forms = SurfaceForms::from_texts(["Shipped the Über-API client", "snake_case rename"]);
		assert_eq!(forms.resolve("überapi"), "Über-API");
		assert_eq!(forms.resolve("über-api"), "Über-API");
		assert_eq!(forms.resolve("snake_case"), "snake_case");
	}

	#[test]
	fn later_occurrences_win() {
		let forms = SurfaceForms::from_texts(["deploy", "DEPLOY"]);
		assert_eq!(forms.resolve("deploy"), "DEPLOY");
	}
}
