//! Clause analysis pipeline
//!
//! The core of the contract analyzer: language detection, clause
//! segmentation, contract-type classification, entity extraction, per-clause
//! risk/obligation/ambiguity annotation and the aggregate risk rollup.
//!
//! Language-dependent behavior is selected once per document: the pipeline
//! detects the script, picks the matching [`LanguageAnalyzer`] implementation
//! and threads it through every stage. All keyword tables and patterns are
//! compiled at construction; analysis itself is pure and holds no state
//! across documents.
//!
//! [`LanguageAnalyzer`]: contract_analyzer_core::LanguageAnalyzer

pub mod aggregate;
pub mod ambiguity;
pub mod classifier;
pub mod detect;
pub mod english;
pub mod hindi;
pub mod obligation;
pub mod pipeline;
pub mod risk;
pub mod rules;

pub use aggregate::{RiskAggregator, RiskRollup};
pub use ambiguity::AmbiguityDetector;
pub use classifier::ContractClassifier;
pub use detect::ScriptDetector;
pub use english::EnglishAnalyzer;
pub use hindi::HindiAnalyzer;
pub use obligation::ObligationClassifier;
pub use pipeline::AnalysisPipeline;
pub use risk::RiskScorer;
pub use rules::{load_rules, AnalysisRules, ObligationCues, RiskKeywords};

use thiserror::Error;

/// Errors raised while building the pipeline
///
/// Analysis itself is total: once constructed, the pipeline degrades
/// gracefully instead of failing.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read rules file: {0}")]
    RulesIo(#[from] std::io::Error),

    #[error("Failed to parse rules file: {0}")]
    RulesParse(#[from] toml::de::Error),
}

impl From<AnalysisError> for contract_analyzer_core::Error {
    fn from(err: AnalysisError) -> Self {
        contract_analyzer_core::Error::Analysis(err.to_string())
    }
}
