use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use standup_core::types::{WordFrequencyEntry, WordSource};

/// Shown in place of an empty cloud.
pub const NO_WORDS_PLACEHOLDER: &str = "No significant words found";

/// Display size bucket of a cloud word relative to the most frequent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Largest,
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.75 {
            SizeTier::Largest
        } else if ratio > 0.5 {
            SizeTier::Large
        } else if ratio > 0.25 {
            SizeTier::Medium
        } else {
            SizeTier::Small
        }
    }
}

/// Ranked words of one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloud {
    entries: Vec<WordFrequencyEntry>,
}

impl WordCloud {
    pub fn new(entries: Vec<WordFrequencyEntry>) -> Self { Self { entries } }

    pub fn entries(&self) -> &[WordFrequencyEntry] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Highest count, or 1 for an empty cloud.
    pub fn max_value(&self) -> u32 { self.entries.iter().map(|e| e.value).max().unwrap_or(1).max(1) }

    /// The entries, or the placeholder entry when there are none.
    pub fn display_entries(&self) -> Vec<WordFrequencyEntry> {
        if self.entries.is_empty() {
            return vec![WordFrequencyEntry::new(NO_WORDS_PLACEHOLDER, 1)];
        }
        self.entries.clone()
    }

    pub fn tier(&self, entry: &WordFrequencyEntry) -> SizeTier {
        SizeTier::from_ratio(f64::from(entry.value) / f64::from(self.max_value()))
    }
}

/// Merge per-field rankings into one.
///
/// Words are taken in field order, then first-seen order within a field.
/// Counts are summed; the source is the highest-priority field the word
/// appeared in. The result is sorted descending (ties keep merge order) and
/// cut to `top_n`.
pub fn merge_field_frequencies<'a, I>(fields: I, top_n: usize) -> Vec<WordFrequencyEntry>
where
    I: IntoIterator<Item = (WordSource, &'a [WordFrequencyEntry])>,
{
    let mut merged: IndexMap<String, (u32, WordSource)> = IndexMap::new();
    for (source, entries) in fields {
        for entry in entries.iter().filter(|e| e.value > 0) {
            let slot = merged.entry(entry.text.clone()).or_insert((0, source));
            slot.0 += entry.value;
            if source.priority() > slot.1.priority() {
                slot.1 = source;
            }
        }
    }
    let mut entries: Vec<WordFrequencyEntry> = merged
        .into_iter()
        .map(|(text, (value, source))| WordFrequencyEntry::new(text, value).with_source(source))
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries.truncate(top_n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_ratio_thresholds() {
        assert_eq!(SizeTier::from_ratio(1.0), SizeTier::Largest);
        assert_eq!(SizeTier::from_ratio(0.75), SizeTier::Large);
        assert_eq!(SizeTier::from_ratio(0.5), SizeTier::Medium);
        assert_eq!(SizeTier::from_ratio(0.25), SizeTier::Small);
        assert_eq!(SizeTier::from_ratio(0.0), SizeTier::Small);
    }

    #[test]
    fn empty_cloud_shows_placeholder() {
        let cloud = WordCloud::default();
        let shown = cloud.display_entries();
        assert_eq!(shown, vec![WordFrequencyEntry::new(NO_WORDS_PLACEHOLDER, 1)]);
        assert_eq!(shown[0].source, WordSource::Default);
        assert_eq!(cloud.max_value(), 1);
    }

    #[test]
    fn merge_sums_counts_and_prefers_blockers() {
        let progress = vec![WordFrequencyEntry::new("api", 2), WordFrequencyEntry::new("login", 1)];
        let blockers = vec![WordFrequencyEntry::new("login", 1)];
        let next = vec![WordFrequencyEntry::new("deploy", 3), WordFrequencyEntry::new("api", 1)];
        let merged = merge_field_frequencies(
            [
                (WordSource::Progress, progress.as_slice()),
                (WordSource::Blockers, blockers.as_slice()),
                (WordSource::NextSteps, next.as_slice()),
            ],
            100,
        );
        let got: Vec<(&str, u32, WordSource)> = merged.iter().map(|e| (e.text.as_str(), e.value, e.source)).collect();
        assert_eq!(
            got,
            vec![
                ("api", 3, WordSource::NextSteps),
                ("deploy", 3, WordSource::NextSteps),
                ("login", 2, WordSource::Blockers),
            ]
        );
    }
}
