//! Unified clause analysis pipeline

use std::sync::Arc;

use contract_analyzer_config::AnalysisSettings;
use contract_analyzer_core::{
    AnalysisResult, Clause, Language, LanguageAnalyzer, Result, RiskTier, SourceFormat, Summarizer,
};

use crate::aggregate::RiskAggregator;
use crate::ambiguity::AmbiguityDetector;
use crate::classifier::ContractClassifier;
use crate::detect::ScriptDetector;
use crate::english::EnglishAnalyzer;
use crate::hindi::HindiAnalyzer;
use crate::obligation::ObligationClassifier;
use crate::rules::AnalysisRules;
use crate::AnalysisError;

/// Suggestion attached to clauses that did not score High
const ACCEPTABLE_SUGGESTION: &str = "Clause acceptable.";

/// Substitutes for summarizer output when even the fallback errors
const STATIC_SUGGESTION: &str = "Consider renegotiating this clause.";
const STATIC_SUMMARY: &str = "LLM disabled. Showing rule-based summary.";

/// The clause analysis pipeline
///
/// Built once per process from settings; every field is read-only after
/// construction, so an `Arc<AnalysisPipeline>` can be shared across
/// concurrent requests. Holds no state across documents.
pub struct AnalysisPipeline {
    detector: ScriptDetector,
    english: EnglishAnalyzer,
    hindi: HindiAnalyzer,
    classifier: ContractClassifier,
    obligation: ObligationClassifier,
    ambiguity: AmbiguityDetector,
    aggregator: RiskAggregator,
    summarizer: Arc<dyn Summarizer>,
}

impl AnalysisPipeline {
    /// Create a pipeline from settings
    ///
    /// Loads the keyword rule override file when configured, otherwise the
    /// built-in tables.
    pub fn new(
        settings: &AnalysisSettings,
        summarizer: Arc<dyn Summarizer>,
    ) -> std::result::Result<Self, AnalysisError> {
        let rules = match &settings.rules_path {
            Some(path) => crate::rules::load_rules(path)?,
            None => AnalysisRules::default(),
        };
        Ok(Self::with_rules(rules, settings, summarizer))
    }

    /// Create a pipeline with pre-built rule tables
    pub fn with_rules(
        rules: AnalysisRules,
        settings: &AnalysisSettings,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            detector: ScriptDetector::new(),
            english: EnglishAnalyzer::new(&rules),
            hindi: HindiAnalyzer::new(&rules),
            classifier: ContractClassifier::new(),
            obligation: ObligationClassifier::new(&rules.obligation),
            ambiguity: AmbiguityDetector::new(&rules),
            aggregator: RiskAggregator::new(settings.high_threshold, settings.medium_threshold),
            summarizer,
        }
    }

    /// Whether the configured summarizer calls an external service
    pub fn summarizer_is_external(&self) -> bool {
        self.summarizer.is_external()
    }

    /// Select the analyzer for a detected language, once per document
    fn analyzer_for(&self, text: &str) -> &dyn LanguageAnalyzer {
        match self.detector.detect(text) {
            Language::Hindi => &self.hindi,
            Language::English => &self.english,
        }
    }

    /// Analyze one document's extracted text
    ///
    /// Total for readable input: degraded stages (summarizer failures, zero
    /// clauses, zero entities) produce defaults, never errors.
    pub async fn analyze(&self, text: &str, format: SourceFormat) -> Result<AnalysisResult> {
        let analyzer = self.analyzer_for(text);
        let language = analyzer.language();

        let clause_texts = analyzer.segment(text);
        let contract_type = self.classifier.classify(text);
        let entities = analyzer.extract_entities(text);

        tracing::debug!(
            language = %language,
            contract_type = %contract_type,
            clauses = clause_texts.len(),
            entities = entities.len(),
            "Segmented and classified document"
        );

        let mut clauses = Vec::with_capacity(clause_texts.len());
        for (i, clause_text) in clause_texts.into_iter().enumerate() {
            let risk = analyzer.score_risk(&clause_text);
            let obligation = self.obligation.classify(&clause_text);
            let ambiguous = self.ambiguity.is_ambiguous(&clause_text);

            let suggestion = if risk == RiskTier::High {
                match self.summarizer.suggest(&clause_text).await {
                    Ok(suggestion) => suggestion,
                    Err(e) => {
                        tracing::warn!(error = %e, clause = i + 1, "Suggestion failed, using static fallback");
                        STATIC_SUGGESTION.to_string()
                    }
                }
            } else {
                ACCEPTABLE_SUGGESTION.to_string()
            };

            clauses.push(Clause {
                index: i + 1,
                text: clause_text,
                risk,
                obligation,
                ambiguous,
                suggestion,
            });
        }

        let rollup = self.aggregator.aggregate(clauses.iter().map(|c| c.risk));

        let summary = match self.summarizer.summarize(text).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "Summary failed, using static fallback");
                STATIC_SUMMARY.to_string()
            }
        };

        tracing::info!(
            language = %language,
            contract_type = %contract_type,
            overall_risk = %rollup.overall,
            high = rollup.high_count,
            medium = rollup.medium_count,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            language,
            format,
            contract_type,
            clauses,
            entities,
            overall_risk: rollup.overall,
            high_count: rollup.high_count,
            medium_count: rollup.medium_count,
            summary,
        })
    }
}
