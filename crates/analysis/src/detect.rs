//! Script-based language detection

use contract_analyzer_core::{Language, Script};

/// Detects the document language from its script
///
/// Policy: the presence of any Devanagari character classifies the document
/// as Hindi, everything else as English. Deterministic and total; empty text
/// defaults to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> Language {
        if text
            .chars()
            .any(|c| Script::Devanagari.contains_char(c))
        {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_english() {
        let detector = ScriptDetector::new();
        assert_eq!(
            detector.detect("This agreement is made between the parties."),
            Language::English
        );
    }

    #[test]
    fn test_devanagari_is_hindi() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect("यह अनुबंध पक्षों के बीच है।"), Language::Hindi);
    }

    #[test]
    fn test_single_devanagari_char_wins() {
        let detector = ScriptDetector::new();
        assert_eq!(
            detector.detect("The employee (कर्मचारी) shall comply."),
            Language::Hindi
        );
    }

    #[test]
    fn test_empty_text_defaults_to_english() {
        let detector = ScriptDetector::new();
        assert_eq!(detector.detect(""), Language::English);
    }
}
