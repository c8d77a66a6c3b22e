//! Axum route handlers for the Resume API.

use std::path::{Component, Path};

use axum::{extract::State, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::generator::{render_resume_pdf, GenerationOutcome};
use crate::resume::models::{CompactResumeRequest, ResumeRequest, StandardResumeRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// `status` is `generated` or `failed`; `message` is the human-readable result line.
/// A save failure is still a 200: the failure is reported, not raised.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub message: String,
}

impl From<&GenerationOutcome> for GenerateResponse {
    fn from(outcome: &GenerationOutcome) -> Self {
        Self {
            status: outcome.status().to_string(),
            message: outcome.message(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/standard
///
/// Two-page résumé with separate education, work and license tables.
pub async fn handle_generate_standard(
    State(state): State<AppState>,
    Json(request): Json<StandardResumeRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    render_blocking(state, request).await
}

/// POST /api/v1/resumes/compact
///
/// Single-page résumé with one merged history table.
pub async fn handle_generate_compact(
    State(state): State<AppState>,
    Json(request): Json<CompactResumeRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    render_blocking(state, request).await
}

/// Validates the request and runs the render on the blocking pool.
async fn render_blocking<R>(state: AppState, request: R) -> Result<Json<GenerateResponse>, AppError>
where
    R: ResumeRequest + Send + 'static,
{
    validate_output_filename(request.output_filename())?;

    let output_dir = state.config.output_dir.clone();
    let face = state.font;

    // Layout and serialization are CPU-bound
    let outcome = tokio::task::spawn_blocking(move || {
        render_resume_pdf(&request, face, &output_dir, Local::now().date_naive())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume render: {e}")))?;

    Ok(Json(GenerateResponse::from(&outcome)))
}

fn validate_output_filename(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "output_filename cannot be empty".to_string(),
        ));
    }
    if name.ends_with('/') || name.ends_with('\\') {
        return Err(AppError::Validation(format!(
            "output_filename must name a file, got '{name}'"
        )));
    }
    // Only plain relative segments, so the file stays under OUTPUT_DIR.
    if !Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(AppError::Validation(format!(
            "output_filename must be a relative path inside the output directory, got '{name}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::render::register_fonts;
    use crate::routes::build_router;

    fn state_for(output_dir: &Path) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                output_dir: output_dir.to_path_buf(),
            },
            font: register_fonts(),
        }
    }

    async fn post(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_standard_endpoint_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post(
            state_for(dir.path()),
            "/api/v1/resumes/standard",
            json!({
                "name": "山田 太郎",
                "kana": "やまだ たろう",
                "education_history": ["2020 4 〇〇大学入学", "2024 3 〇〇大学卒業"],
                "work_history": ["フリーランスとしてWeb開発"],
                "licenses": [],
                "motivation": "よろしくお願いします。",
                "output_filename": "yamada.pdf"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "generated");
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("履歴書PDFを生成しました。"));
        assert!(message.contains("yamada.pdf"));
        assert!(dir.path().join("yamada.pdf").exists());
    }

    #[tokio::test]
    async fn test_compact_endpoint_defaults_filename() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post(
            state_for(dir.path()),
            "/api/v1/resumes/compact",
            json!({ "education_work_history": ["2020 4 入学"] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "generated");
        assert!(dir.path().join("resume.pdf").exists());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let (status, body) = post(state_for(&missing), "/api/v1/resumes/compact", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "failed");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("PDFの保存中にエラーが発生しました: "));
    }

    #[tokio::test]
    async fn test_empty_output_filename_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post(
            state_for(dir.path()),
            "/api/v1/resumes/standard",
            json!({ "output_filename": "  " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_directory_output_filename_is_rejected() {
        assert!(validate_output_filename("out/").is_err());
        assert!(validate_output_filename("out\\").is_err());
        assert!(validate_output_filename("out/resume.pdf").is_ok());
    }

    #[test]
    fn test_output_filename_must_stay_inside_output_dir() {
        assert!(validate_output_filename("../resume.pdf").is_err());
        assert!(validate_output_filename("out/../../resume.pdf").is_err());
        assert!(validate_output_filename("./resume.pdf").is_err());
        assert!(validate_output_filename("/etc/resume.pdf").is_err());
        assert!(validate_output_filename("resume.pdf").is_ok());
    }

    #[tokio::test]
    async fn test_parent_dir_filename_does_not_escape() {
        let dir = tempfile::tempdir().unwrap();
        let jail = dir.path().join("jail");
        std::fs::create_dir(&jail).unwrap();
        let (status, body) = post(
            state_for(&jail),
            "/api/v1/resumes/compact",
            json!({ "output_filename": "../escaped.pdf" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!dir.path().join("escaped.pdf").exists());
    }

    #[tokio::test]
    async fn test_absolute_filename_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let jail = dir.path().join("jail");
        std::fs::create_dir(&jail).unwrap();
        let outside = dir.path().join("outside.pdf");
        let (status, _) = post(
            state_for(&jail),
            "/api/v1/resumes/standard",
            json!({ "output_filename": outside.to_string_lossy() }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!outside.exists());
    }
}
