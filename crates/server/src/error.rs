//! Server error responses
//!
//! User-visible failures name the stage that failed (extraction vs analysis)
//! and never leak internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use contract_analyzer_extraction::ExtractionError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Analysis failed")]
    Analysis(#[source] contract_analyzer_core::Error),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the client
    fn public_message(&self) -> String {
        match self {
            // Extraction errors are already user-level descriptions
            Self::BadRequest(_) | Self::Extraction(_) => self.to_string(),
            // Anything inside the pipeline stays internal
            Self::Analysis(_) => "Analysis failed".to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Request failed");

        let body = Json(serde_json::json!({
            "error": self.public_message(),
        }));
        (status, body).into_response()
    }
}
