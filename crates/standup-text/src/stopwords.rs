use once_cell::sync::Lazy;
use std::collections::HashSet;

use standup_core::types::StopWordFilter;

pub const ENGLISH_STOP_WORDS: &[&str] = &[
	"a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "with",
	"by", "about", "as", "into", "like", "through", "after", "over", "between", "out", "of", "from",
	"up", "down", "is", "am", "are", "was", "were", "be", "been", "being", "have", "has",
	"had", "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
	"must", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
	"them", "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
	"this", "that", "these", "those",
];

pub const THAI_STOP_WORDS: &[&str] = &[
	"และ", "ของ", "ที่", "ใน", "มี", "เป็น", "การ", "ไม่", "ให้", "ได้",
	"จะ", "นี้", "ว่า", "กับ", "แต่", "อยู่", "ก็", "เมื่อ", "เรา", "เขา",
	"คุณ", "เพื่อ", "จาก", "ถ้า", "แล้ว", "ต้อง", "โดย", "หรือ", "ทำ", "ตาม",
	"ด้วย", "ยัง", "ซึ่ง", "หนึ่ง", "สอง", "มาก", "อื่น", "ทุก", "ทาง", "เคย",
	"อย่าง", "นั้น", "ถึง", "เลย", "ควร", "อาจ", "ช่วย", "ขึ้น", "ลง", "มา",
	"ไป", "เสมอ", "กว่า", "นะ", "ครับ", "ค่ะ", "นะคะ", "นะครับ", "จ้า", "จ้ะ",
	"จัง", "ๆ", "กำลัง", "จริง",
];

static ENGLISH: Lazy<StopWordSet> = Lazy::new(|| StopWordSet::from_words(ENGLISH_STOP_WORDS.iter().copied()));
static THAI: Lazy<StopWordSet> = Lazy::new(|| StopWordSet::from_words(THAI_STOP_WORDS.iter().copied()));
static ANY: Lazy<StopWordSet> = Lazy::new(|| {
	StopWordSet::from_words(ENGLISH_STOP_WORDS.iter().chain(THAI_STOP_WORDS.iter()).copied())
});

/// An immutable set of function words excluded from the word cloud.
#[derive(Debug, Clone)]
pub struct StopWordSet {
	words: HashSet<&'static str>,
}

impl StopWordSet {
	fn from_words<I: IntoIterator<Item = &'static str>>(words: I) -> Self {
		Self { words: words.into_iter().collect() }
	}

	/// The process-wide set for a filter mode; `Any` is the union of both lists.
	pub fn for_filter(filter: StopWordFilter) -> &'static StopWordSet {
		match filter {
			StopWordFilter::English => &*ENGLISH,
			StopWordFilter::Thai => &*THAI,
			StopWordFilter::Any => &*ANY,
		}
	}

	/// Membership on the lowercased form. Thai has no case, so Thai words match byte for byte.
	pub fn contains(&self, word: &str) -> bool {
		if self.words.contains(word) { return true; }
		let lowered = word.to_lowercase();
		lowered != word && self.words.contains(lowered.as_str())
	}
}
