use standup_core::script::{contains_thai, is_thai_char, script_runs, Script};
use standup_core::traits::ThaiSegmenter;
use standup_core::types::{StopWordFilter, Token};

/// Splits mixed Thai / non-Thai text into cleaned tokens.
///
/// Non-Thai runs are split on whitespace; Thai runs go through the injected
/// segmenter. All non-Thai tokens come first, then all Thai tokens, which fixes
/// the tie order of the frequency ranking.
pub struct Tokenizer {
	segmenter: Box<dyn ThaiSegmenter>,
}

impl Tokenizer {
	pub fn new(segmenter: Box<dyn ThaiSegmenter>) -> Self { Self { segmenter } }

	pub fn segmenter_name(&self) -> &'static str { self.segmenter.name() }

	/// Raw word candidates before cleaning, in emission order.
	pub fn raw_tokens(&self, text: &str, filter: StopWordFilter) -> Vec<String> {
		let runs = script_runs(text);
		let mut words = Vec::new();
		if filter.tokenizes_latin() {
			for run in runs.iter().filter(|r| r.script == Script::Other && !r.text.trim().is_empty()) {
				words.extend(run.text.split_whitespace().map(str::to_string));
			}
		}
		if filter.tokenizes_thai() {
			for run in runs.iter().filter(|r| r.script == Script::Thai) {
				words.extend(self.segmenter.segment(run.text));
			}
		}
		words
	}

	/// Cleaned tokens; tokens that clean down to nothing are dropped.
	pub fn tokenize(&self, text: &str, filter: StopWordFilter) -> Vec<Token> {
		self.raw_tokens(text, filter)
			.into_iter()
			.filter_map(|surface| {
				let normalized = clean_token(&surface);
				if normalized.is_empty() { return None; }
				let script = Script::of_text(&normalized);
				Some(Token { surface, normalized, script })
			})
			.collect()
	}
}

/// Lowercase unless the token carries Thai, then keep only word characters
/// (alphanumerics and `_`) and Thai characters.
pub fn clean_token(raw: &str) -> String {
	let cased = if contains_thai(raw) { raw.to_string() } else { raw.to_lowercase() };
	cased.chars().filter(|&c| c.is_alphanumeric() || c == '_' || is_thai_char(c)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::segment::DictionarySegmenter;

	fn tokenizer() -> Tokenizer { Tokenizer::new(Box::new(DictionarySegmenter::new())) }

	#[test]
	fn clean_token_strips_punctuation_and_lowercases() {
		assert_eq!(clean_token("Today."), "today");
		assert_eq!(clean_token("(API-key)"), "apikey");
		assert_eq!(clean_token("snake_case"), "snake_case");
		assert_eq!(clean_token("ทีม!"), "ทีม");
		assert_eq!(clean_token("--"), "");
	}

	#[test]
	fn filter_selects_sub_tokenizers() {
		let t = tokenizer();
		let text = "Deploy ทีม service";
		assert_eq!(t.raw_tokens(text, StopWordFilter::English), vec!["Deploy", "service"]);
		assert_eq!(t.raw_tokens(text, StopWordFilter::Thai), vec!["ทีม"]);
		assert_eq!(t.raw_tokens(text, StopWordFilter::Any), vec!["Deploy", "service", "ทีม"]);
	}

	#[test]
	fn tokens_keep_surface_and_script() {
		let t = tokenizer();
		let tokens = t.tokenize("Login, ทีม", StopWordFilter::Any);
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].surface, "Login,");
		assert_eq!(tokens[0].normalized, "login");
		assert_eq!(tokens[0].script, Script::Other);
		assert_eq!(tokens[1].script, Script::Thai);
	}
}
