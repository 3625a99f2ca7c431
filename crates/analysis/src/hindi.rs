//! Hindi language analyzer

use once_cell::sync::Lazy;
use regex::Regex;

use contract_analyzer_core::{EntityBag, EntityCategory, Language, LanguageAnalyzer, RiskTier};

use crate::risk::RiskScorer;
use crate::rules::AnalysisRules;

// Entity patterns over the Devanagari block (U+0900..U+097F).
static PERSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Honorific prefix: श्री followed by one or two Devanagari words
    Regex::new(r"श्री\s+[\u{0900}-\u{097F}]+(?:\s+[\u{0900}-\u{097F}]+)?").unwrap()
});

static ORG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Corporate suffix: word followed by प्राइवेट लिमिटेड / लिमिटेड / कंपनी
    Regex::new(r"[A-Za-z\u{0900}-\u{097F}]+\s+(?:प्राइवेट लिमिटेड|लिमिटेड|कंपनी)").unwrap()
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // <1-2 digit day> <month word> <4 digit year>
    Regex::new(r"\d{1,2}\s+[\u{0900}-\u{097F}]+\s+\d{4}").unwrap()
});

static MONEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₹\s?\d[\d,]*|\d[\d,]*\s?रुपये").unwrap());

/// Hindi implementation of the language capability interface
///
/// Segmentation splits on the Devanagari sentence terminators (। ॥ . ? !)
/// and falls back to newlines when no terminator is present. Entities come
/// from the pattern rules above; risk scoring uses the Hindi keyword table.
pub struct HindiAnalyzer {
    risk: RiskScorer,
}

impl HindiAnalyzer {
    pub fn new(rules: &AnalysisRules) -> Self {
        Self {
            risk: RiskScorer::new(&rules.hindi),
        }
    }
}

impl LanguageAnalyzer for HindiAnalyzer {
    fn language(&self) -> Language {
        Language::Hindi
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let terminators = Language::Hindi.sentence_terminators();
        // Boundary detection never found a sentence end: fall back to
        // line-based clauses instead of one document-sized clause
        let has_terminator = text.chars().any(|c| terminators.contains(&c));

        if has_terminator {
            text.split(|c: char| terminators.contains(&c))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        } else {
            text.lines()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        }
    }

    fn extract_entities(&self, text: &str) -> EntityBag {
        let mut bag = EntityBag::new();

        for m in PERSON_PATTERN.find_iter(text) {
            bag.push(EntityCategory::Person, m.as_str());
        }
        for m in ORG_PATTERN.find_iter(text) {
            bag.push(EntityCategory::Org, m.as_str());
        }
        for m in DATE_PATTERN.find_iter(text) {
            bag.push(EntityCategory::Date, m.as_str());
        }
        for m in MONEY_PATTERN.find_iter(text) {
            bag.push(EntityCategory::Money, m.as_str());
        }
        // No Hindi location rule; the LOCATION key stays present and empty

        bag
    }

    fn score_risk(&self, clause: &str) -> RiskTier {
        self.risk.score(clause)
    }
}
