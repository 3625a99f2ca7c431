//! Document-level risk rollup

use contract_analyzer_core::RiskTier;

/// Result of aggregating per-clause tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskRollup {
    pub overall: RiskTier,
    pub high_count: usize,
    pub medium_count: usize,
}

/// Rolls per-clause risk tiers into one overall verdict
///
/// More than `high_threshold` High clauses make the document High; otherwise
/// more than `medium_threshold` Medium clauses make it Medium; otherwise
/// Low. Thresholds are absolute clause counts, deliberately not normalized
/// by document length.
pub struct RiskAggregator {
    high_threshold: usize,
    medium_threshold: usize,
}

impl RiskAggregator {
    pub fn new(high_threshold: usize, medium_threshold: usize) -> Self {
        Self {
            high_threshold,
            medium_threshold,
        }
    }

    pub fn aggregate(&self, tiers: impl IntoIterator<Item = RiskTier>) -> RiskRollup {
        let mut high_count = 0;
        let mut medium_count = 0;
        for tier in tiers {
            match tier {
                RiskTier::High => high_count += 1,
                RiskTier::Medium => medium_count += 1,
                RiskTier::Low => {}
            }
        }

        let overall = if high_count > self.high_threshold {
            RiskTier::High
        } else if medium_count > self.medium_threshold {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };

        RiskRollup {
            overall,
            high_count,
            medium_count,
        }
    }
}

impl Default for RiskAggregator {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RiskTier::{High, Low, Medium};

    #[test]
    fn test_three_high_clauses_trip_high() {
        let rollup = RiskAggregator::default().aggregate([High, High, High]);
        assert_eq!(rollup.overall, High);
        assert_eq!(rollup.high_count, 3);
        assert_eq!(rollup.medium_count, 0);
    }

    #[test]
    fn test_three_medium_clauses_trip_medium() {
        let rollup = RiskAggregator::default().aggregate([Medium, Medium, Medium]);
        assert_eq!(rollup.overall, Medium);
        assert_eq!(rollup.medium_count, 3);
    }

    #[test]
    fn test_below_thresholds_is_low() {
        let rollup = RiskAggregator::default().aggregate([High, Medium, Low, Low]);
        assert_eq!(rollup.overall, Low);
        assert_eq!(rollup.high_count, 1);
        assert_eq!(rollup.medium_count, 1);
    }

    #[test]
    fn test_exactly_threshold_is_not_enough() {
        // Verdict requires strictly more than the threshold
        let rollup = RiskAggregator::default().aggregate([High, High]);
        assert_eq!(rollup.overall, Low);
    }

    #[test]
    fn test_empty_document_is_low() {
        let rollup = RiskAggregator::default().aggregate(std::iter::empty());
        assert_eq!(rollup.overall, Low);
        assert_eq!(rollup.high_count, 0);
    }

    #[test]
    fn test_custom_thresholds() {
        let rollup = RiskAggregator::new(0, 0).aggregate([High]);
        assert_eq!(rollup.overall, High);
    }
}
