//! Optional external summarization
//!
//! The analysis pipeline asks a [`Summarizer`] for the plain-language
//! contract summary and for safer-alternative suggestions on risky clauses.
//! This crate provides:
//! - [`ClaudeSummarizer`]: Anthropic Messages API backend
//! - [`RuleBasedSummarizer`]: deterministic canned strings, no network
//! - [`FallbackSummarizer`]: tries the external backend, falls back on error
//!
//! `create_summarizer` picks the right composition from settings; a missing
//! API key or a failing service never breaks an analysis.

mod claude;
mod factory;
mod rule_based;

pub use claude::{ClaudeConfig, ClaudeModel, ClaudeSummarizer};
pub use factory::{create_summarizer, FallbackSummarizer};
pub use rule_based::{RuleBasedSummarizer, RULE_BASED_SUGGESTION, RULE_BASED_SUMMARY};

use contract_analyzer_core::Summarizer;
use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for contract_analyzer_core::Error {
    fn from(err: LlmError) -> Self {
        contract_analyzer_core::Error::Summarizer(err.to_string())
    }
}

/// Boxed summarizer handle shared across the pipeline
pub type SharedSummarizer = std::sync::Arc<dyn Summarizer>;
