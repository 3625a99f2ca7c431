//! Capability traits for pluggable analysis backends
//!
//! Language-dependent behavior lives behind [`LanguageAnalyzer`], with one
//! implementation per supported language selected once per document and
//! threaded through the pipeline. The optional external summarizer sits
//! behind [`Summarizer`] so the pipeline never knows whether a real service
//! is configured.

use async_trait::async_trait;

use crate::contract::{EntityBag, RiskTier};
use crate::error::Result;
use crate::language::Language;

/// Language-specific analysis capabilities
///
/// Implementations hold their compiled keyword tables and patterns; they are
/// built once and read-only afterward, so sharing across concurrent analyses
/// is safe.
pub trait LanguageAnalyzer: Send + Sync {
    /// The language this analyzer handles
    fn language(&self) -> Language;

    /// Split text into an ordered, fully materialized list of trimmed,
    /// non-empty clause strings. Must be idempotent for identical input.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Extract entities from the full document text. Every category key is
    /// present in the returned bag, possibly empty.
    fn extract_entities(&self, text: &str) -> EntityBag;

    /// Score a single clause. Total: always returns exactly one tier,
    /// defaulting to [`RiskTier::Low`] when no keyword matches.
    fn score_risk(&self, clause: &str) -> RiskTier;
}

/// Plain-language summary and clause-suggestion provider
///
/// Backed either by an external text-generation service or by deterministic
/// canned strings. External failures must be handled by the caller or a
/// wrapping fallback implementation; they are never fatal to an analysis.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize the whole contract in simple business language
    async fn summarize(&self, text: &str) -> Result<String>;

    /// Suggest a safer alternative for a risky clause
    async fn suggest(&self, clause: &str) -> Result<String>;

    /// Whether an external service backs this summarizer
    fn is_external(&self) -> bool;
}
