//! English language analyzer

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use contract_analyzer_core::{EntityBag, EntityCategory, Language, LanguageAnalyzer, RiskTier};

use crate::risk::RiskScorer;
use crate::rules::AnalysisRules;

// Entity patterns. Pattern rules, not a trained tagger: precision is
// bounded, which is acceptable for the report's entity summary.
static PERSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Shri|Smt)\.?\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?").unwrap()
});

static ORG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[A-Z][\w&]*(?:\s+[A-Z][\w&]*)*\s+(?:Pvt\.?\s*Ltd\.?|Private Limited|Limited|Ltd\.?|LLP|LLC|Inc\.?|Corporation|Corp\.?|Company)\b",
    )
    .unwrap()
});

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b|\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
    )
    .unwrap()
});

static MONEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:₹|\brs\.?|\binr\b|\busd\b|\$)\s*\d[\d,]*(?:\.\d+)?(?:\s*(?:lakh|crore|million|billion))?|\b\d[\d,]*(?:\.\d+)?\s*(?:rupees|dollars)\b",
    )
    .unwrap()
});

static LOCATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:registered office at|located at|located in|situated at|situated in|city of)\s+([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?)",
    )
    .unwrap()
});

/// English implementation of the language capability interface
///
/// Segmentation uses UAX #29 sentence boundaries; entities come from the
/// pattern rules above; risk scoring uses the English keyword table.
pub struct EnglishAnalyzer {
    risk: RiskScorer,
}

impl EnglishAnalyzer {
    pub fn new(rules: &AnalysisRules) -> Self {
        Self {
            risk: RiskScorer::new(&rules.english),
        }
    }
}

impl LanguageAnalyzer for EnglishAnalyzer {
    fn language(&self) -> Language {
        Language::English
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
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
        for caps in LOCATION_PATTERN.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                bag.push(EntityCategory::Location, m.as_str());
            }
        }

        bag
    }

    fn score_risk(&self, clause: &str) -> RiskTier {
        self.risk.score(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_rules;

    fn analyzer() -> EnglishAnalyzer {
        EnglishAnalyzer::new(&default_rules())
    }

    #[test]
    fn test_segment_sentences() {
        let clauses = analyzer().segment(
            "Employee shall not disclose confidential information. He may terminate with notice.",
        );
        assert_eq!(clauses.len(), 2);
        assert!(clauses[0].starts_with("Employee shall not"));
        assert!(clauses[1].starts_with("He may terminate"));
    }

    #[test]
    fn test_segment_is_idempotent() {
        let text = "First clause. Second clause.\nThird clause on a new line.";
        let a = analyzer();
        assert_eq!(a.segment(text), a.segment(text));
    }

    #[test]
    fn test_segment_filters_blank_candidates() {
        let clauses = analyzer().segment("First clause.   \n\n   Second clause.  ");
        assert_eq!(clauses.len(), 2);
        assert!(clauses.iter().all(|c| !c.trim().is_empty()));
    }

    #[test]
    fn test_segment_empty_text() {
        assert!(analyzer().segment("").is_empty());
        assert!(analyzer().segment("   \n  ").is_empty());
    }

    #[test]
    fn test_extract_person_and_org() {
        let bag = analyzer().extract_entities(
            "This agreement is between Mr. Rajesh Kumar and Acme Services Private Limited.",
        );
        assert_eq!(bag.get(EntityCategory::Person), &["Mr. Rajesh Kumar"]);
        assert_eq!(
            bag.get(EntityCategory::Org),
            &["Acme Services Private Limited"]
        );
    }

    #[test]
    fn test_extract_date_and_money() {
        let bag = analyzer().extract_entities(
            "Effective 1 April 2024, the fee is Rs. 50,000 payable by 15/04/2024.",
        );
        assert_eq!(bag.get(EntityCategory::Date), &["1 April 2024", "15/04/2024"]);
        assert_eq!(bag.get(EntityCategory::Money), &["Rs. 50,000"]);
    }

    #[test]
    fn test_money_needs_a_currency_marker() {
        // "rs" inside a word must not anchor a money match
        let bag = analyzer().extract_entities("The vendor offers 30 day terms.");
        assert!(bag.get(EntityCategory::Money).is_empty());
    }

    #[test]
    fn test_extract_location() {
        let bag = analyzer()
            .extract_entities("The company has its registered office at New Delhi.");
        assert_eq!(bag.get(EntityCategory::Location), &["New Delhi"]);
    }

    #[test]
    fn test_entities_empty_text_keeps_all_keys() {
        let bag = analyzer().extract_entities("");
        for category in EntityCategory::all() {
            assert!(bag.get(*category).is_empty());
        }
    }
}
