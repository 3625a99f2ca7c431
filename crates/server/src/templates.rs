//! SME-friendly contract templates
//!
//! Fixed starter clause lists served read-only; nothing here feeds back into
//! analysis.

use serde::Serialize;

/// A named contract template with its starter clauses
#[derive(Debug, Clone, Serialize)]
pub struct ContractTemplate {
    pub name: &'static str,
    pub clauses: &'static [&'static str],
}

/// All built-in templates
pub fn all_templates() -> &'static [ContractTemplate] {
    &[
        ContractTemplate {
            name: "Employment",
            clauses: &[
                "Employee shall work as per company policies.",
                "Salary shall be paid monthly.",
                "Either party may terminate with 30 days notice.",
                "Confidentiality must be maintained.",
            ],
        },
        ContractTemplate {
            name: "Service",
            clauses: &[
                "Service provider shall deliver services.",
                "Client shall pay as per invoice.",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_present() {
        let templates = all_templates();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "Employment");
        assert!(!templates[0].clauses.is_empty());
    }

    #[test]
    fn test_templates_serialize() {
        let json = serde_json::to_value(all_templates()).unwrap();
        assert_eq!(json[1]["name"], "Service");
    }
}
