use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown stop-word filter '{0}' (expected english, thai or any)")]
    UnknownFilter(String),

    #[error("Unknown segmenter '{0}' (expected auto, native or dictionary)")]
    UnknownSegmenter(String),

    #[error("Invalid report: {0}")]
    InvalidReport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
