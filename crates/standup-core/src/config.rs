//! Layered configuration for the analysis engines.
//!
//! Uses Figment to merge built-in defaults + `standup.toml` +
//! `standup.<env>.toml` + `STANDUP_*` env vars (`__` separates keys, so
//! `STANDUP_ANALYSIS__TOP_N=50` sets `analysis.top_n`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::StopWordFilter;

pub const CONFIG_FILE: &str = "standup.toml";
pub const ENV_PREFIX: &str = "STANDUP_";

/// Which Thai segmentation strategy an engine is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// Native segmenter when compiled in, dictionary otherwise.
    #[default]
    Auto,
    Native,
    Dictionary,
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SegmenterKind::Auto => "auto",
            SegmenterKind::Native => "native",
            SegmenterKind::Dictionary => "dictionary",
        })
    }
}

impl FromStr for SegmenterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SegmenterKind::Auto),
            "native" | "icu" => Ok(SegmenterKind::Native),
            "dictionary" | "dict" => Ok(SegmenterKind::Dictionary),
            _ => Err(Error::UnknownSegmenter(s.to_string())),
        }
    }
}

/// Tunables for the tokenizer and frequency engine (`[analysis]` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub segmenter: SegmenterKind,
    pub default_filter: StopWordFilter,
    /// Entries kept after sorting.
    pub top_n: usize,
    /// Longest dictionary word tried by the fallback segmenter, in characters.
    pub max_word_length: usize,
    /// Out-of-vocabulary Thai characters grouped into one heuristic word.
    pub max_group_length: usize,
    /// Tokens shorter than this (in characters) are dropped.
    pub min_token_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::Auto,
            default_filter: StopWordFilter::Any,
            top_n: 100,
            max_word_length: 10,
            max_group_length: 5,
            min_token_chars: 2,
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("top_n", self.top_n),
            ("max_word_length", self.max_word_length),
            ("max_group_length", self.max_group_length),
            ("min_token_chars", self.min_token_chars),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("analysis.{} must be greater than zero", key)));
            }
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Self::defaults().merge(Toml::file(CONFIG_FILE));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("standup.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("standup.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("standup.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    /// Load a specific file on top of the defaults. `~` and `$VAR` are expanded.
    pub fn from_file<S: AsRef<str>>(path: S) -> Result<Self> {
        let path = expand_path(path);
        if !path.is_file() {
            return Err(Error::InvalidConfig(format!("config file not found: {}", path.display())));
        }
        let figment = Self::defaults()
            .merge(Toml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    /// Built-in defaults only, ignoring files and the environment.
    pub fn defaults_only() -> Self {
        Self { figment: Self::defaults() }
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn analysis(&self) -> Result<AnalysisSettings> {
        self.get("analysis")
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::default("analysis", AnalysisSettings::default()))
    }

    fn validate(&self) -> Result<()> {
        self.analysis()?.validate()
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
