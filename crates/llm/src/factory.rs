//! Summarizer construction from settings

use std::sync::Arc;

use async_trait::async_trait;

use contract_analyzer_config::{SummarizerProvider, SummarizerSettings};
use contract_analyzer_core::{Result, Summarizer};

use crate::claude::{ClaudeConfig, ClaudeSummarizer};
use crate::rule_based::RuleBasedSummarizer;
use crate::SharedSummarizer;

/// Tries a primary summarizer, substituting the fallback's answer on error
///
/// External-service failures are logged and absorbed here so they can never
/// fail an analysis.
pub struct FallbackSummarizer {
    primary: SharedSummarizer,
    fallback: SharedSummarizer,
}

impl FallbackSummarizer {
    pub fn new(primary: SharedSummarizer, fallback: SharedSummarizer) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Summarizer for FallbackSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        match self.primary.summarize(text).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                tracing::warn!(error = %e, "Summarizer failed, using fallback summary");
                self.fallback.summarize(text).await
            }
        }
    }

    async fn suggest(&self, clause: &str) -> Result<String> {
        match self.primary.suggest(clause).await {
            Ok(suggestion) => Ok(suggestion),
            Err(e) => {
                tracing::warn!(error = %e, "Summarizer failed, using fallback suggestion");
                self.fallback.suggest(clause).await
            }
        }
    }

    fn is_external(&self) -> bool {
        self.primary.is_external()
    }
}

/// Create a summarizer based on settings
///
/// The Claude provider is always wrapped with the rule-based fallback; a
/// missing API key degrades to the fallback alone with a warning.
pub fn create_summarizer(settings: &SummarizerSettings) -> SharedSummarizer {
    match settings.provider {
        SummarizerProvider::Claude => {
            match ClaudeSummarizer::new(ClaudeConfig::from_settings(settings)) {
                Ok(claude) => {
                    tracing::info!(model = %settings.model, "Using Claude summarizer with rule-based fallback");
                    Arc::new(FallbackSummarizer::new(
                        Arc::new(claude),
                        Arc::new(RuleBasedSummarizer),
                    ))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Claude summarizer unavailable, using rule-based summarizer");
                    Arc::new(RuleBasedSummarizer)
                }
            }
        }
        SummarizerProvider::Disabled => Arc::new(RuleBasedSummarizer),
    }
}
