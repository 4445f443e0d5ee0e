//! Axum route handlers for the PDF API.
//!
//! Request flow: resolve style → synthesize markup → render → store.
//! A failed render never reaches the store, so no filename handle can ever
//! point at a partial artifact.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::artifacts::sweeper::{self, SweepReport};
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::style::{resolve_style, DEFAULT_TEMPLATE};
use crate::synthesis::build_document;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    /// Fully-resolved resume data. Fetching by id is the caller's job —
    /// this engine never talks to a data store.
    pub resume_data: Option<ResumeRecord>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePdfResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
    pub report: SweepReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pdf/generate
///
/// Renders the supplied resume with the chosen template and stores the
/// resulting PDF. Returns the artifact filename handle.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Json<GeneratePdfResponse>, AppError> {
    let resume = request
        .resume_data
        .ok_or_else(|| AppError::Validation("resume_data is required".to_string()))?;

    let template = request.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let style = resolve_style(template);
    let markup = build_document(&resume, style);

    let pdf = state.renderer.render(&markup).await?;
    let filename = state.store.save(pdf).await?;

    Ok(Json(GeneratePdfResponse {
        success: true,
        message: "PDF generated successfully".to_string(),
        filename,
    }))
}

/// GET /api/v1/pdf/:filename/download
///
/// Streams a previously generated artifact back. Unsafe filenames are
/// rejected by the store before any filesystem access.
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.store.load(&filename).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// POST /api/v1/pdf/cleanup
///
/// Runs a retention sweep immediately, independent of the background
/// schedule.
pub async fn handle_cleanup_pdfs(
    State(state): State<AppState>,
) -> Result<Json<CleanupResponse>, AppError> {
    let report = sweeper::sweep(&state.store, state.config.retention_max_age()).await?;

    Ok(Json(CleanupResponse {
        success: true,
        message: "PDF cleanup completed".to_string(),
        report,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    use crate::artifacts::ArtifactStore;
    use crate::config::Config;
    use crate::render::{PdfRenderer, RenderError};
    use crate::routes::build_router;

    /// Echoes the markup back as the "PDF" so tests can observe what the
    /// synthesizer produced end-to-end.
    struct StubRenderer;

    #[async_trait]
    impl PdfRenderer for StubRenderer {
        async fn render(&self, markup: &str) -> Result<Bytes, RenderError> {
            if markup.trim().is_empty() {
                return Err(RenderError::InvalidInput("markup document is empty".into()));
            }
            Ok(Bytes::from(markup.to_owned()))
        }
    }

    fn test_state(dir: &std::path::Path) -> AppState {
        AppState {
            config: Config {
                output_dir: dir.to_path_buf(),
                render_timeout_secs: 5,
                render_pool_size: 1,
                retention_max_age_hours: 24,
                sweep_interval_secs: 3600,
                port: 0,
                rust_log: "info".to_string(),
            },
            store: Arc::new(ArtifactStore::new(dir).unwrap()),
            renderer: Arc::new(StubRenderer),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn generate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/pdf/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_filename_and_persists_artifact() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());
        let store = state.store.clone();
        let app = build_router(state);

        let response = app
            .oneshot(generate_request(json!({
                "resume_data": { "personal_info": { "fullName": "Jane Doe" } },
                "template": "modern"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));

        let filename = body["filename"].as_str().unwrap();
        assert!(filename.starts_with("resume_") && filename.ends_with(".pdf"));
        assert!(store.exists(filename).await);
    }

    #[tokio::test]
    async fn test_generate_without_resume_data_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = app
            .oneshot(generate_request(json!({ "template": "modern" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_generate_with_unknown_template_falls_back_and_succeeds() {
        let dir = tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = app
            .oneshot(generate_request(json!({
                "resume_data": { "personal_info": { "fullName": "Jane Doe" } },
                "template": "nonexistent-template"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_download_missing_artifact_returns_not_found() {
        let dir = tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/pdf/resume_missing.pdf/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_cleanup_reports_sweep_results() {
        let dir = tempdir().unwrap();
        let app = build_router(test_state(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/pdf/cleanup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["report"]["deleted"], json!(0));
    }

    /// Full pipeline for the minimal record: header present, empty sections
    /// absent, stored bytes re-delivered unchanged on download.
    #[tokio::test]
    async fn test_generate_then_download_round_trips_the_rendered_document() {
        let dir = tempdir().unwrap();
        let state = test_state(dir.path());
        let store = state.store.clone();
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(generate_request(json!({
                "resume_data": {
                    "personal_info": { "fullName": "Jane Doe" },
                    "experience": [],
                    "education": [],
                    "skills": []
                },
                "template": "modern"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let filename = body_json(response).await["filename"]
            .as_str()
            .unwrap()
            .to_string();

        let stored = store.load(&filename).await.unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/pdf/{filename}/download"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/pdf"
        );

        let downloaded = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(downloaded, stored);

        let document = String::from_utf8(downloaded.to_vec()).unwrap();
        assert!(document.contains("Jane Doe"));
        assert!(!document.contains("Professional Experience"));
        assert!(!document.contains("Education"));
        assert!(!document.contains("Skills"));
    }
}
