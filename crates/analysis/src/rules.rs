//! Keyword rule tables
//!
//! Risk tiers, obligation cues and hedge words are data, not code: the
//! defaults below ship compiled in, and a deployment can replace them
//! wholesale with a TOML file via `analysis.rules_path`. An override file
//! replaces every table it is loaded from; there is no per-table merging.

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Complete rule table set for both languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRules {
    /// Version of rules
    pub version: String,
    /// English risk keywords by tier
    #[serde(default)]
    pub english: RiskKeywords,
    /// Hindi risk keywords by tier
    #[serde(default)]
    pub hindi: RiskKeywords,
    /// Modal cue phrases, shared across both languages
    #[serde(default)]
    pub obligation: ObligationCues,
    /// Hedge words that mark a clause ambiguous
    #[serde(default)]
    pub hedges: Vec<String>,
}

/// Risk keywords for one language, in tier priority order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskKeywords {
    /// Checked first; any match wins
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

/// Modal cue phrases for obligation classification
///
/// Prohibition cues are checked before obligation cues: "shall not" contains
/// "shall" and must win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObligationCues {
    #[serde(default)]
    pub prohibition: Vec<String>,
    #[serde(default)]
    pub obligation: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

impl Default for AnalysisRules {
    fn default() -> Self {
        default_rules()
    }
}

/// Load rules from a TOML file
pub fn load_rules(path: &str) -> Result<AnalysisRules, AnalysisError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Get the built-in rule tables
pub fn default_rules() -> AnalysisRules {
    AnalysisRules {
        version: "1.0.0".to_string(),
        english: RiskKeywords {
            high: strings(&[
                "indemnify",
                "penalty",
                "terminate",
                "liability",
                "damages",
                "non-compete",
                "intellectual property",
            ]),
            medium: strings(&["arbitration", "jurisdiction", "lock-in", "auto-renew"]),
            low: strings(&["payment", "notice", "confidentiality"]),
        },
        hindi: RiskKeywords {
            high: strings(&[
                "क्षतिपूर्ति",
                "दंड",
                "समाप्त",
                "उत्तरदायित्व",
                "प्रतिस्पर्धा",
                "बौद्धिक संपदा",
            ]),
            medium: strings(&["मध्यस्थता", "क्षेत्राधिकार"]),
            low: strings(&["भुगतान", "सूचना", "गोपनीयता"]),
        },
        obligation: ObligationCues {
            prohibition: strings(&["shall not", "नहीं करेगा"]),
            obligation: strings(&["shall", "must", "करेगा"]),
            right: strings(&["may", "सकता है"]),
        },
        hedges: strings(&["reasonable", "as per", "may be", "उचित", "समय समय पर"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_populated() {
        let rules = default_rules();
        assert_eq!(rules.version, "1.0.0");
        assert!(!rules.english.high.is_empty());
        assert!(!rules.hindi.high.is_empty());
        assert!(!rules.obligation.prohibition.is_empty());
        assert!(!rules.hedges.is_empty());
    }

    #[test]
    fn test_prohibition_cues_contain_their_obligation_cue() {
        // The precedence the classifier relies on only matters because the
        // stronger cue embeds the weaker one
        let rules = default_rules();
        assert!(rules.obligation.prohibition.contains(&"shall not".to_string()));
        assert!(rules.obligation.obligation.contains(&"shall".to_string()));
    }

    #[test]
    fn test_serialize_rules() {
        let rules = default_rules();
        let toml_str = toml::to_string_pretty(&rules).unwrap();
        assert!(toml_str.contains("version"));
        assert!(toml_str.contains("high"));
    }

    #[test]
    fn test_rules_roundtrip() {
        let rules = default_rules();
        let toml_str = toml::to_string_pretty(&rules).unwrap();
        let parsed: AnalysisRules = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.english.high, rules.english.high);
        assert_eq!(parsed.obligation.right, rules.obligation.right);
    }
}
