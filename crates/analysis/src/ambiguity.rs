//! Hedge-language detection

use crate::rules::AnalysisRules;

/// Flags clauses containing hedging language
///
/// One fixed hedge list spans both languages; any case-insensitive substring
/// match marks the clause ambiguous.
pub struct AmbiguityDetector {
    hedges: Vec<String>,
}

impl AmbiguityDetector {
    pub fn new(rules: &AnalysisRules) -> Self {
        Self {
            hedges: rules.hedges.iter().map(|h| h.to_lowercase()).collect(),
        }
    }

    pub fn is_ambiguous(&self, clause: &str) -> bool {
        let clause = clause.to_lowercase();
        self.hedges.iter().any(|h| clause.contains(h.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    fn detector() -> AmbiguityDetector {
        AmbiguityDetector::new(&default_rules())
    }

    #[test]
    fn test_hedge_words_flagged() {
        assert!(detector().is_ambiguous("Employee shall work as per company policies."));
        assert!(detector().is_ambiguous("A reasonable notice period applies."));
        assert!(detector().is_ambiguous("Terms may be revised."));
    }

    #[test]
    fn test_hindi_hedges() {
        assert!(detector().is_ambiguous("उचित समय के भीतर भुगतान होगा।"));
        assert!(detector().is_ambiguous("समय समय पर नियम बदल सकते हैं।"));
    }

    #[test]
    fn test_precise_clause_not_flagged() {
        assert!(!detector().is_ambiguous("Salary shall be paid on the first of each month."));
    }
}
