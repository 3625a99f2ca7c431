//! Per-analysis audit record

use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use contract_analyzer_core::AnalysisResult;

use crate::ReportError;

/// One clause row of the audit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditClause {
    pub clause: String,
    pub risk: String,
    #[serde(rename = "type")]
    pub obligation: String,
}

/// The audit document written once per analysis
///
/// The wire shape is fixed: consumers downstream parse exactly these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// ISO-8601 timestamp of the analysis
    pub time: String,
    pub language: String,
    pub contract_type: String,
    pub clauses: Vec<AuditClause>,
}

impl AuditRecord {
    /// Build the record from an analysis result, stamped with the current time
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            time: Utc::now().to_rfc3339(),
            language: result.language.name().to_string(),
            contract_type: result.contract_type.as_str().to_string(),
            clauses: result
                .clauses
                .iter()
                .map(|c| AuditClause {
                    clause: c.text.clone(),
                    risk: c.risk.as_str().to_string(),
                    obligation: c.obligation.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Destination for audit records
pub trait AuditSink: Send + Sync {
    /// Write one record; returns where it landed
    fn record(&self, result: &AnalysisResult) -> Result<PathBuf, ReportError>;
}

/// Writes each audit record as its own JSON file under a directory
///
/// File names carry a UUID so concurrent analyses never collide; the mutex
/// only serializes directory creation on first use.
pub struct FileAuditSink {
    dir: PathBuf,
    init: Mutex<bool>,
}

impl FileAuditSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            init: Mutex::new(false),
        }
    }

    fn ensure_dir(&self) -> Result<(), ReportError> {
        let mut created = self.init.lock();
        if !*created {
            std::fs::create_dir_all(&self.dir)?;
            *created = true;
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, result: &AnalysisResult) -> Result<PathBuf, ReportError> {
        self.ensure_dir()?;

        let record = AuditRecord::from_result(result);
        let path = self.dir.join(format!("audit-{}.json", Uuid::new_v4()));
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&path, json)?;

        tracing::debug!(path = %path.display(), clauses = record.clauses.len(), "Wrote audit record");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_analyzer_core::{
        Clause, ContractType, EntityBag, Language, ObligationType, RiskTier, SourceFormat,
    };

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            language: Language::English,
            format: SourceFormat::Txt,
            contract_type: ContractType::Employment,
            clauses: vec![
                Clause {
                    index: 1,
                    text: "Employee shall not disclose confidential information.".to_string(),
                    risk: RiskTier::Low,
                    obligation: ObligationType::Prohibition,
                    ambiguous: false,
                    suggestion: "Clause acceptable.".to_string(),
                },
                Clause {
                    index: 2,
                    text: "Either party may terminate with notice.".to_string(),
                    risk: RiskTier::High,
                    obligation: ObligationType::Right,
                    ambiguous: false,
                    suggestion: "Consider renegotiating this clause.".to_string(),
                },
            ],
            entities: EntityBag::new(),
            overall_risk: RiskTier::Low,
            high_count: 1,
            medium_count: 0,
            summary: "LLM disabled. Showing rule-based summary.".to_string(),
        }
    }

    #[test]
    fn test_record_shape() {
        let record = AuditRecord::from_result(&sample_result());
        assert_eq!(record.language, "English");
        assert_eq!(record.contract_type, "Employment");
        assert_eq!(record.clauses.len(), 2);
        assert_eq!(record.clauses[1].risk, "High");
        assert_eq!(record.clauses[1].obligation, "Right");
        // RFC 3339 timestamps parse back
        assert!(chrono::DateTime::parse_from_rfc3339(&record.time).is_ok());
    }

    #[test]
    fn test_clause_type_field_name() {
        let record = AuditRecord::from_result(&sample_result());
        let json = serde_json::to_value(&record).unwrap();
        // Wire format uses "type", not "obligation"
        assert_eq!(json["clauses"][0]["type"], "Prohibition");
        assert!(json["clauses"][0].get("obligation").is_none());
    }

    #[test]
    fn test_roundtrip_preserves_clauses() {
        let record = AuditRecord::from_result(&sample_result());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert_eq!(parsed.clauses.len(), 2);
        assert_eq!(parsed.clauses[0].risk, "Low");
        assert_eq!(parsed.clauses[0].obligation, "Prohibition");
    }

    #[test]
    fn test_file_sink_writes_parseable_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path().join("audit"));

        let path = sink.record(&sample_result()).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: AuditRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.clauses.len(), 2);
    }

    #[test]
    fn test_file_sink_unique_paths() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path().join("audit"));
        let result = sample_result();

        let a = sink.record(&result).unwrap();
        let b = sink.record(&result).unwrap();
        assert_ne!(a, b);
    }
}
