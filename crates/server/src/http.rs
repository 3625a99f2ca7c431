//! HTTP endpoints
//!
//! REST API for the contract analyzer.

use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use contract_analyzer_core::AnalysisResult;
use contract_analyzer_report::{render_report, AuditSink};

use crate::error::ServerError;
use crate::state::AppState;
use crate::templates::all_templates;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );
    let max_upload = state.settings.server.max_upload_bytes;
    let request_timeout = Duration::from_secs(state.settings.server.request_timeout_secs);

    Router::new()
        // Analysis endpoint (multipart upload)
        .route("/api/analyze", post(analyze))
        // Report rendering
        .route("/api/report", post(report))
        // Contract templates
        .route("/api/templates", get(templates))
        // Health check
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Upload a contract and run the full analysis pipeline
async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ServerError> {
    let mut upload: Option<(Vec<u8>, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let mime = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::BadRequest(format!("Failed to read upload: {}", e)))?;
            upload = Some((bytes.to_vec(), mime));
            break;
        }
    }

    let (bytes, mime) = upload
        .ok_or_else(|| ServerError::BadRequest("Missing multipart field 'file'".to_string()))?;

    let document = contract_analyzer_extraction::extract(&bytes, mime.as_deref())?;

    let result = state
        .pipeline
        .analyze(&document.text, document.format)
        .await
        .map_err(ServerError::Analysis)?;

    // Audit failures are logged, never surfaced: the analysis stands
    if let Some(audit) = &state.audit {
        if let Err(e) = audit.record(&result) {
            tracing::warn!(error = %e, "Failed to write audit record");
        }
    }

    Ok(Json(result))
}

/// Render an analysis result as the downloadable plain-text report
async fn report(Json(result): Json<AnalysisResult>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_report(&result),
    )
}

/// List built-in contract templates
async fn templates() -> impl IntoResponse {
    Json(all_templates())
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
