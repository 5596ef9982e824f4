use serde::{Deserialize, Serialize};

use standup_core::config::{AnalysisSettings, Config};
use standup_core::types::{Span, StopWordFilter, WordFrequencyEntry};
use standup_core::Result;
use standup_search::{find_sentences, highlight};
use standup_text::{FrequencyEngine, SurfaceForms};

use crate::cloud::{merge_field_frequencies, WordCloud};
use crate::report::Report;

/// A sentence that mentions the clicked word, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub sentence: String,
    /// Label of the section the sentence came from.
    pub source: String,
    pub spans: Vec<Span>,
}

/// Word cloud and reference lookup for single reports.
pub struct ReportAnalyzer {
    engine: FrequencyEngine,
}

impl ReportAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self { Self::with_engine(FrequencyEngine::new(settings)) }

    pub fn with_engine(engine: FrequencyEngine) -> Self { Self { engine } }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_engine(FrequencyEngine::from_config(config)?))
    }

    pub fn engine(&self) -> &FrequencyEngine { &self.engine }

    /// Word cloud under the configured default filter.
    pub fn default_word_cloud(&self, report: &Report) -> WordCloud {
        self.word_cloud(report, self.engine.settings().default_filter)
    }

    /// Per-section frequencies merged into one cloud, each word tagged with
    /// the most urgent section it appeared in.
    #[tracing::instrument(skip_all, fields(report = %report.id, filter = %filter))]
    pub fn word_cloud(&self, report: &Report, filter: StopWordFilter) -> WordCloud {
        let per_section: Vec<(_, Vec<WordFrequencyEntry>)> = report
            .sections()
            .into_iter()
            .map(|s| (s.kind.word_source(), self.engine.word_frequencies(&s.text, filter)))
            .collect();
        let entries = merge_field_frequencies(
            per_section.iter().map(|(source, entries)| (*source, entries.as_slice())),
            self.engine.settings().top_n,
        );
        tracing::debug!(sections = per_section.len(), words = entries.len(), "word cloud built");
        WordCloud::new(entries)
    }

    /// Lookup from cloud words back to the spelling used in the report.
    pub fn surface_forms(&self, report: &Report) -> SurfaceForms {
        SurfaceForms::from_texts(report.sections().into_iter().map(|s| s.text))
    }

    /// Sentences mentioning a clicked cloud word, with highlight spans.
    #[tracing::instrument(skip_all, fields(report = %report.id, clicked = %clicked))]
    pub fn references(&self, report: &Report, clicked: &str) -> Vec<Reference> {
        let forms = self.surface_forms(report);
        let word = forms.resolve(clicked);
        tracing::debug!(resolved = %word, "searching report");
        find_sentences(&report.text_sources(), word)
            .into_iter()
            .map(|m| {
                let spans = highlight(&m.sentence, word);
                Reference { sentence: m.sentence, source: m.source, spans }
            })
            .collect()
    }
}

impl Default for ReportAnalyzer {
    fn default() -> Self { Self::new(AnalysisSettings::default()) }
}
