//! standup-report
//!
//! Report ingestion and the per-report facade tying the frequency engine and
//! sentence search together.

pub mod analyzer;
pub mod cloud;
pub mod field;
pub mod report;

pub use analyzer::{Reference, ReportAnalyzer};
pub use cloud::{merge_field_frequencies, SizeTier, WordCloud, NO_WORDS_PLACEHOLDER};
pub use field::FieldText;
pub use report::{Report, Section, SectionKind};
