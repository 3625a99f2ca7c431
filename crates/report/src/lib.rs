//! Audit records and report rendering
//!
//! The analyzer's only persistence: one JSON audit document per analysis,
//! written through [`AuditSink`], plus the downloadable plain-text report.
//! Both consume the immutable `AnalysisResult` and never feed anything back
//! into the pipeline.

mod audit;
mod render;

pub use audit::{AuditClause, AuditRecord, AuditSink, FileAuditSink};
pub use render::render_report;

use thiserror::Error;

/// Errors raised while writing audit records
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ReportError> for contract_analyzer_core::Error {
    fn from(err: ReportError) -> Self {
        contract_analyzer_core::Error::Audit(err.to_string())
    }
}
