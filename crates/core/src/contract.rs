//! Contract domain types
//!
//! Everything downstream of extraction operates on these types: the
//! extracted document text, its ordered clauses, the entity bag, and the
//! aggregate result handed to reporting and audit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Source format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl SourceFormat {
    /// Infer format from a MIME type string, if recognizable
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime == "application/pdf" {
            Some(Self::Pdf)
        } else if mime.contains("word") {
            Some(Self::Docx)
        } else if mime.starts_with("text/") {
            Some(Self::Txt)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity classification of a clause's legal exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Modal-derived classification of what a clause requires, forbids or permits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationType {
    /// "shall not" - a prohibited action
    Prohibition,
    /// "shall", "must" - a required duty
    Obligation,
    /// "may" - a permitted action
    Right,
    /// No modal cue found
    Neutral,
}

impl ObligationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prohibition => "Prohibition",
            Self::Obligation => "Obligation",
            Self::Right => "Right",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for ObligationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contract-type label assigned by the keyword classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContractType {
    Employment,
    Vendor,
    Lease,
    Partnership,
    Service,
    #[default]
    General,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employment => "Employment",
            Self::Vendor => "Vendor",
            Self::Lease => "Lease",
            Self::Partnership => "Partnership",
            Self::Service => "Service",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed entity categories extracted from contract text
///
/// Declaration order is the canonical display order; `EntityBag` relies on
/// `Ord` following it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityCategory {
    Person,
    Org,
    Date,
    Money,
    Location,
}

impl EntityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Date => "DATE",
            Self::Money => "MONEY",
            Self::Location => "LOCATION",
        }
    }

    /// All categories, in display order
    pub fn all() -> &'static [EntityCategory] {
        &[
            Self::Person,
            Self::Org,
            Self::Date,
            Self::Money,
            Self::Location,
        ]
    }
}

/// Extracted entity spans bucketed by category
///
/// Invariant: every category key is always present, possibly with an empty
/// sequence. Spans keep document order and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityBag {
    #[serde(flatten)]
    spans: BTreeMap<EntityCategory, Vec<String>>,
}

impl EntityBag {
    /// Create an empty bag with all category keys present
    pub fn new() -> Self {
        let mut spans = BTreeMap::new();
        for category in EntityCategory::all() {
            spans.insert(*category, Vec::new());
        }
        Self { spans }
    }

    /// Append a span to a category, preserving insertion order
    pub fn push(&mut self, category: EntityCategory, span: impl Into<String>) {
        self.spans.entry(category).or_default().push(span.into());
    }

    /// Spans for a category (always defined)
    pub fn get(&self, category: EntityCategory) -> &[String] {
        self.spans
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate categories with their spans, in display order
    pub fn iter(&self) -> impl Iterator<Item = (EntityCategory, &[String])> {
        self.spans.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Total number of extracted spans across all categories
    pub fn len(&self) -> usize {
        self.spans.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EntityBag {
    fn default() -> Self {
        Self::new()
    }
}

/// One segmented unit of contract text with its annotations
///
/// Created by the segmenter, annotated once by the scoring pass, read-only
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    /// Position in the document, 1-based for display
    pub index: usize,
    pub text: String,
    pub risk: RiskTier,
    pub obligation: ObligationType,
    pub ambiguous: bool,
    /// Renegotiation suggestion for risky clauses, canned otherwise
    pub suggestion: String,
}

/// The complete output of one analysis run
///
/// Immutable; the sole artifact consumed by reporting and the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub format: SourceFormat,
    pub contract_type: ContractType,
    pub clauses: Vec<Clause>,
    pub entities: EntityBag,
    pub overall_risk: RiskTier,
    pub high_count: usize,
    pub medium_count: usize,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_from_mime() {
        assert_eq!(
            SourceFormat::from_mime("application/pdf"),
            Some(SourceFormat::Pdf)
        );
        assert_eq!(
            SourceFormat::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Some(SourceFormat::Docx)
        );
        assert_eq!(SourceFormat::from_mime("text/plain"), Some(SourceFormat::Txt));
        assert_eq!(SourceFormat::from_mime("image/png"), None);
    }

    #[test]
    fn test_entity_bag_all_keys_present() {
        let bag = EntityBag::new();
        for category in EntityCategory::all() {
            assert!(bag.get(*category).is_empty());
        }
        assert!(bag.is_empty());
    }

    #[test]
    fn test_entity_bag_keeps_insertion_order_and_duplicates() {
        let mut bag = EntityBag::new();
        bag.push(EntityCategory::Person, "Mr. Sharma");
        bag.push(EntityCategory::Person, "Mr. Gupta");
        bag.push(EntityCategory::Person, "Mr. Sharma");
        assert_eq!(
            bag.get(EntityCategory::Person),
            &["Mr. Sharma", "Mr. Gupta", "Mr. Sharma"]
        );
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn test_entity_bag_serializes_category_names() {
        let bag = EntityBag::new();
        let json = serde_json::to_value(&bag).unwrap();
        for category in EntityCategory::all() {
            assert!(json.get(category.as_str()).is_some());
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RiskTier::High.to_string(), "High");
        assert_eq!(ObligationType::Prohibition.to_string(), "Prohibition");
        assert_eq!(ContractType::Employment.to_string(), "Employment");
    }
}
