//! Core traits and types for the contract analyzer
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (English, Hindi)
//! - Contract domain types (clauses, risk tiers, obligations, entities)
//! - Capability traits for language-specific analysis and summarization
//! - Error types

pub mod contract;
pub mod error;
pub mod language;
pub mod traits;

pub use contract::{
    AnalysisResult, Clause, ContractType, EntityBag, EntityCategory, ObligationType, RiskTier,
    SourceFormat,
};
pub use error::{Error, Result};
pub use language::{Language, Script};
pub use traits::{LanguageAnalyzer, Summarizer};
