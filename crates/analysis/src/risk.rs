//! Per-clause risk scoring

use contract_analyzer_core::RiskTier;

use crate::rules::RiskKeywords;

/// First-match keyword scorer for one language
///
/// Tiers are checked High, then Medium, then Low; the first tier with a
/// matching keyword wins and no keyword at all defaults to Low. Matching is
/// case-insensitive substring search, so the scorer is total: every clause
/// gets exactly one tier.
pub struct RiskScorer {
    tiers: Vec<(RiskTier, Vec<String>)>,
}

impl RiskScorer {
    pub fn new(keywords: &RiskKeywords) -> Self {
        let lower = |words: &[String]| words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            tiers: vec![
                (RiskTier::High, lower(&keywords.high)),
                (RiskTier::Medium, lower(&keywords.medium)),
                (RiskTier::Low, lower(&keywords.low)),
            ],
        }
    }

    pub fn score(&self, clause: &str) -> RiskTier {
        let clause = clause.to_lowercase();
        for (tier, keywords) in &self.tiers {
            if keywords.iter().any(|k| clause.contains(k.as_str())) {
                return *tier;
            }
        }
        RiskTier::Low
    }
}
