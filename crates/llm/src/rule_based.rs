//! Deterministic fallback summarizer

use async_trait::async_trait;

use contract_analyzer_core::{Result, Summarizer};

/// Summary returned when no external service is configured
pub const RULE_BASED_SUMMARY: &str = "LLM disabled. Showing rule-based summary.";

/// Suggestion returned when no external service is configured
pub const RULE_BASED_SUGGESTION: &str = "Consider renegotiating this clause.";

/// Summarizer that returns canned strings and never fails
///
/// Used when the external provider is disabled and as the fallback arm when
/// it is enabled but unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSummarizer;

#[async_trait]
impl Summarizer for RuleBasedSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String> {
        Ok(RULE_BASED_SUMMARY.to_string())
    }

    async fn suggest(&self, _clause: &str) -> Result<String> {
        Ok(RULE_BASED_SUGGESTION.to_string())
    }

    fn is_external(&self) -> bool {
        false
    }
}
