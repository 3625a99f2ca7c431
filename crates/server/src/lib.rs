//! HTTP server for the contract analyzer
//!
//! One multipart upload endpoint runs the full pipeline and returns the
//! structured `AnalysisResult`; the rest is read-only glue (templates, report
//! rendering, health). All presentation happens client-side.

pub mod error;
pub mod http;
pub mod state;
pub mod templates;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;
