//! Contract-type classification

use contract_analyzer_core::ContractType;

/// Keyword classifier over the full document text
///
/// Rules are checked in a fixed priority order so that specific contract
/// types win over generic ones: a staffing agreement mentioning "services"
/// is still an employment contract. First matching rule wins; no match
/// yields General.
pub struct ContractClassifier {
    rules: Vec<(ContractType, Vec<&'static str>)>,
}

impl ContractClassifier {
    pub fn new() -> Self {
        // Priority: Employment > Vendor > Lease > Partnership > Service
        Self {
            rules: vec![
                (
                    ContractType::Employment,
                    vec!["employee", "employment", "employer", "कर्मचारी", "रोजगार"],
                ),
                (
                    ContractType::Vendor,
                    vec!["vendor", "supplier", "विक्रेता"],
                ),
                (
                    ContractType::Lease,
                    vec!["lease", "tenant", "landlord", "पट्टा", "किराया"],
                ),
                (ContractType::Partnership, vec!["partnership", "साझेदारी"]),
                (ContractType::Service, vec!["service", "सेवा"]),
            ],
        }
    }

    pub fn classify(&self, text: &str) -> ContractType {
        let text = text.to_lowercase();
        for (contract_type, keywords) in &self.rules {
            if keywords.iter().any(|k| text.contains(k)) {
                return *contract_type;
            }
        }
        ContractType::General
    }
}

impl Default for ContractClassifier {
    fn default() -> Self {
        Self::new()
    }
}
