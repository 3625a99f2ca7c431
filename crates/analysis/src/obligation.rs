//! Obligation-type classification from modal cues

use contract_analyzer_core::ObligationType;

use crate::rules::ObligationCues;

/// Classifies a clause by its modal verb cues
///
/// Cue sets span both languages, so classification is language-agnostic.
/// Check order is significant: prohibition cues contain their obligation
/// counterparts ("shall not" contains "shall"), so they are matched first.
pub struct ObligationClassifier {
    prohibition: Vec<String>,
    obligation: Vec<String>,
    right: Vec<String>,
}

impl ObligationClassifier {
    pub fn new(cues: &ObligationCues) -> Self {
        let lower = |words: &[String]| words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            prohibition: lower(&cues.prohibition),
            obligation: lower(&cues.obligation),
            right: lower(&cues.right),
        }
    }

    pub fn classify(&self, clause: &str) -> ObligationType {
        let clause = clause.to_lowercase();
        let matches = |cues: &[String]| cues.iter().any(|c| clause.contains(c.as_str()));

        if matches(&self.prohibition) {
            ObligationType::Prohibition
        } else if matches(&self.obligation) {
            ObligationType::Obligation
        } else if matches(&self.right) {
            ObligationType::Right
        } else {
            ObligationType::Neutral
        }
    }
}
