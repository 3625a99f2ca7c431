//! Workspace error types
//!
//! Crate-specific errors (extraction, config, llm) convert into this enum at
//! the boundaries where stages meet, so callers can always tell which stage
//! failed without seeing internal detail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Summarizer error: {0}")]
    Summarizer(String),

    #[error("Audit error: {0}")]
    Audit(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
