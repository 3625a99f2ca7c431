//! Application state
//!
//! Shared state across all handlers. Everything is read-only after startup,
//! so cloning hands out cheap `Arc` references.

use std::sync::Arc;

use contract_analyzer_analysis::AnalysisPipeline;
use contract_analyzer_config::Settings;
use contract_analyzer_llm::create_summarizer;
use contract_analyzer_report::FileAuditSink;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub pipeline: Arc<AnalysisPipeline>,
    /// Absent when auditing is disabled
    pub audit: Option<Arc<FileAuditSink>>,
}

impl AppState {
    /// Build the full pipeline stack from settings
    pub fn from_settings(settings: Settings) -> Result<Self, contract_analyzer_core::Error> {
        let summarizer = create_summarizer(&settings.summarizer);
        let pipeline = AnalysisPipeline::new(&settings.analysis, summarizer)?;

        let audit = settings
            .audit
            .enabled
            .then(|| Arc::new(FileAuditSink::new(settings.audit.dir.clone())));

        if audit.is_none() {
            tracing::info!("Audit records disabled");
        }

        Ok(Self {
            settings: Arc::new(settings),
            pipeline: Arc::new(pipeline),
            audit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_settings() {
        let state = AppState::from_settings(Settings::default()).unwrap();
        let audit = state.audit.as_ref().expect("audit enabled by default");
        assert_eq!(audit.dir(), std::path::Path::new("audit"));
    }

    #[test]
    fn test_audit_disabled() {
        let mut settings = Settings::default();
        settings.audit.enabled = false;
        let state = AppState::from_settings(settings).unwrap();
        assert!(state.audit.is_none());
    }
}
