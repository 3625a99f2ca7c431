//! End-to-end pipeline properties over realistic contract text

use std::sync::Arc;

use contract_analyzer_analysis::AnalysisPipeline;
use contract_analyzer_config::AnalysisSettings;
use contract_analyzer_core::{
    EntityCategory, Language, LanguageAnalyzer, ObligationType, RiskTier, SourceFormat,
};
use contract_analyzer_llm::RuleBasedSummarizer;

const EMPLOYMENT_CONTRACT: &str = "\
This Employment Agreement is made on 1 April 2024 between Acme Services Private Limited, \
having its registered office at Mumbai, and Mr. Rajesh Kumar.
The employee shall work as per company policies.
Salary of Rs. 50,000 shall be paid monthly.
Either party may terminate this agreement with 30 days notice.
The employee shall not disclose confidential information.
The employee shall indemnify the company against losses.
A penalty applies for late deliverables.
Disputes are subject to arbitration in Mumbai.";

fn pipeline() -> AnalysisPipeline {
    AnalysisPipeline::new(&AnalysisSettings::default(), Arc::new(RuleBasedSummarizer)).unwrap()
}

#[tokio::test]
async fn analysis_is_deterministic_for_identical_input() {
    let pipeline = pipeline();
    let first = pipeline
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();
    let second = pipeline
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    assert_eq!(first.clauses.len(), second.clauses.len());
    for (a, b) in first.clauses.iter().zip(second.clauses.iter()) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.text, b.text);
        assert_eq!(a.risk, b.risk);
        assert_eq!(a.obligation, b.obligation);
        assert_eq!(a.ambiguous, b.ambiguous);
    }
    assert_eq!(first.overall_risk, second.overall_risk);
}

#[tokio::test]
async fn no_clause_is_blank() {
    let result = pipeline()
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    assert!(!result.clauses.is_empty());
    for clause in &result.clauses {
        assert!(!clause.text.trim().is_empty());
        assert_eq!(clause.text, clause.text.trim());
    }
}

#[tokio::test]
async fn every_clause_gets_exactly_one_tier_and_type() {
    let result = pipeline()
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    for clause in &result.clauses {
        // The enums themselves guarantee exactly-one; this guards the counts
        match clause.risk {
            RiskTier::High | RiskTier::Medium | RiskTier::Low => {}
        }
        match clause.obligation {
            ObligationType::Prohibition
            | ObligationType::Obligation
            | ObligationType::Right
            | ObligationType::Neutral => {}
        }
    }
    let high = result
        .clauses
        .iter()
        .filter(|c| c.risk == RiskTier::High)
        .count();
    assert_eq!(high, result.high_count);
}

#[tokio::test]
async fn full_contract_rollup() {
    let result = pipeline()
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    assert_eq!(result.language, Language::English);
    assert_eq!(result.contract_type.as_str(), "Employment");

    // "terminate", "indemnify", "penalty" clauses score High: 3 > 2
    assert_eq!(result.high_count, 3);
    assert_eq!(result.overall_risk, RiskTier::High);

    // Entities picked up from the preamble
    assert!(result
        .entities
        .get(EntityCategory::Person)
        .iter()
        .any(|p| p.contains("Rajesh")));
    assert!(result
        .entities
        .get(EntityCategory::Org)
        .iter()
        .any(|o| o.contains("Acme")));
    assert!(!result.entities.get(EntityCategory::Date).is_empty());
    assert!(!result.entities.get(EntityCategory::Money).is_empty());
    assert!(!result.entities.get(EntityCategory::Location).is_empty());
}

#[tokio::test]
async fn prohibition_never_downgrades_to_obligation() {
    let result = pipeline()
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    let prohibition = result
        .clauses
        .iter()
        .find(|c| c.text.contains("shall not"))
        .expect("contract has a prohibition clause");
    assert_eq!(prohibition.obligation, ObligationType::Prohibition);
}

#[tokio::test]
async fn hedged_clause_is_flagged_ambiguous() {
    let result = pipeline()
        .analyze(EMPLOYMENT_CONTRACT, SourceFormat::Txt)
        .await
        .unwrap();

    let hedged = result
        .clauses
        .iter()
        .find(|c| c.text.contains("as per"))
        .expect("contract has a hedged clause");
    assert!(hedged.ambiguous);
}

#[tokio::test]
async fn hindi_contract_end_to_end() {
    let text = "\
यह अनुबंध एबीसी प्राइवेट लिमिटेड और श्री राजेश कुमार के बीच 15 जनवरी 2024 को हुआ।
कर्मचारी कंपनी के नियमों का पालन करेगा।
वेतन ₹50000 मासिक दिया जाएगा।
कर्मचारी गोपनीय जानकारी प्रकट नहीं करेगा।
कंपनी अनुबंध समाप्त कर सकती है।";

    let result = pipeline().analyze(text, SourceFormat::Txt).await.unwrap();

    assert_eq!(result.language, Language::Hindi);
    assert_eq!(result.contract_type.as_str(), "Employment");
    assert!(!result.clauses.is_empty());

    assert!(result
        .clauses
        .iter()
        .any(|c| c.obligation == ObligationType::Prohibition));
    assert!(result
        .clauses
        .iter()
        .any(|c| c.risk == RiskTier::High && c.text.contains("समाप्त")));

    assert!(!result.entities.get(EntityCategory::Person).is_empty());
    assert!(!result.entities.get(EntityCategory::Org).is_empty());
    assert!(!result.entities.get(EntityCategory::Date).is_empty());
    assert!(!result.entities.get(EntityCategory::Money).is_empty());
    // No Hindi location rule: key present, sequence empty
    assert!(result.entities.get(EntityCategory::Location).is_empty());
}

#[test]
fn segmentation_is_idempotent_across_analyzers() {
    use contract_analyzer_analysis::{EnglishAnalyzer, HindiAnalyzer};
    use contract_analyzer_analysis::rules::default_rules;

    let rules = default_rules();
    let english = EnglishAnalyzer::new(&rules);
    let hindi = HindiAnalyzer::new(&rules);

    let en_text = "One. Two? Three!";
    assert_eq!(english.segment(en_text), english.segment(en_text));

    let hi_text = "एक। दो? तीन!";
    assert_eq!(hindi.segment(hi_text), hindi.segment(hi_text));
}
