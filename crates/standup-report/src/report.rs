use serde::{Deserialize, Deserializer, Serialize};

use standup_core::types::{TextSource, WordSource};
use standup_core::{Error, Result};
use standup_search::strip_markdown;

use crate::field::FieldText;

/// A team status report.
///
/// Accepts the JSON the data store produced over time: camelCase keys,
/// structured fields as string, array, `null` or missing. Unknown keys such
/// as `createdAt` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, alias = "team_name", deserialize_with = "null_as_empty")]
    pub team_name: String,
    /// Free-form body, used when no structured field has content.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "FieldText::is_absent")]
    pub progress: FieldText,
    #[serde(default, skip_serializing_if = "FieldText::is_absent")]
    pub blockers: FieldText,
    #[serde(default, alias = "next_steps", skip_serializing_if = "FieldText::is_absent")]
    pub next_steps: FieldText,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where a block of report text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Progress,
    Blockers,
    NextSteps,
    /// The free-form `content` body.
    Content,
}

impl SectionKind {
    /// Label shown next to a found sentence.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Progress => "Progress",
            SectionKind::Blockers => "Blockers",
            SectionKind::NextSteps => "Next Steps",
            SectionKind::Content => "Report",
        }
    }

    pub fn word_source(self) -> WordSource {
        match self {
            SectionKind::Progress => WordSource::Progress,
            SectionKind::Blockers => WordSource::Blockers,
            SectionKind::NextSteps => WordSource::NextSteps,
            SectionKind::Content => WordSource::Default,
        }
    }
}

/// One markdown-cleaned block of report text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

impl Report {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidReport(e.to_string()))
    }

    pub fn has_structured_fields(&self) -> bool {
        self.progress.has_lines() || self.blockers.has_lines() || self.next_steps.has_lines()
    }

    /// The text blocks analysis runs over.
    ///
    /// Structured fields win whenever any of them has lines; all three are then
    /// returned in field order, blank ones included. Otherwise `content` is the
    /// only section, or there are none.
    pub fn sections(&self) -> Vec<Section> {
        if self.has_structured_fields() {
            return [
                (SectionKind::Progress, &self.progress),
                (SectionKind::Blockers, &self.blockers),
                (SectionKind::NextSteps, &self.next_steps),
            ]
            .into_iter()
            .map(|(kind, field)| Section { kind, text: strip_markdown(&field.joined()) })
            .collect();
        }
        if self.content.trim().is_empty() {
            return Vec::new();
        }
        vec![Section { kind: SectionKind::Content, text: strip_markdown(&self.content) }]
    }

    /// Non-blank sections as labeled search inputs.
    pub fn text_sources(&self) -> Vec<TextSource> {
        self.sections()
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .map(|s| TextSource::new(s.text, s.kind.label()))
            .collect()
    }
}
