use std::path::{Path, PathBuf};

use axum::Json;
use axum::extract::{Extension, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;
use crate::domain::{
    DEFAULT_LANGUAGE_LABEL, InputBundle, OutputArtifact, RunId, resolve_language_choice,
};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DiagnoseResponse {
    pub run_id: String,
    pub language: String,
    pub transcript: String,
    pub advice: String,
    pub audio_url: String,
    pub report_url: String,
    pub flowchart_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Keeps a short alphanumeric extension from the client file name, never its path.
fn upload_file_name(stem: &str, client_name: Option<&str>, fallback_ext: &str) -> String {
    let extension = client_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(fallback_ext)
        .to_ascii_lowercase();
    format!("{}.{}", stem, extension)
}

fn artifact_url(run_id: RunId, path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("/artifacts/{}/{}", run_id, file_name)
}

impl DiagnoseResponse {
    fn from_artifact(artifact: OutputArtifact, language: String) -> Self {
        Self {
            run_id: artifact.run_id.to_string(),
            language,
            audio_url: artifact_url(artifact.run_id, &artifact.audio_path),
            report_url: artifact_url(artifact.run_id, &artifact.report_path),
            flowchart_url: artifact_url(artifact.run_id, &artifact.flowchart_path),
            transcript: artifact.transcript,
            advice: artifact.advice,
        }
    }
}

/// Multipart fields: `audio`, `image`, `text_file` (files, all optional) and `language`.
#[tracing::instrument(skip_all)]
pub async fn diagnose_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Response {
    let upload_dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create upload directory");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to accept upload");
        }
    };

    let mut audio: Option<PathBuf> = None;
    let mut image: Option<PathBuf> = None;
    let mut text_file: Option<PathBuf> = None;
    let mut language_label: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        let client_name = field.file_name().map(String::from);

        let (slot, stem, fallback_ext) = match name.as_str() {
            "language" => {
                match field.text().await {
                    Ok(text) if !text.trim().is_empty() => language_label = Some(text),
                    Ok(_) => {}
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read language: {}", e),
                        );
                    }
                }
                continue;
            }
            "audio" => (&mut audio, "recording", "wav"),
            "image" => (&mut image, "image", "jpg"),
            "text_file" => (&mut text_file, "symptoms", "txt"),
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
                continue;
            }
        };

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, field = %name, "Failed to read upload");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read {}: {}", name, e),
                );
            }
        };

        // Browsers send an empty part for file inputs left blank.
        if data.is_empty() {
            continue;
        }

        let path = upload_dir
            .path()
            .join(upload_file_name(stem, client_name.as_deref(), fallback_ext));
        if let Err(e) = tokio::fs::write(&path, &data).await {
            tracing::error!(error = %e, path = %path.display(), "Failed to store upload");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to accept upload");
        }

        tracing::debug!(field = %name, bytes = data.len(), "Upload stored");
        *slot = Some(path);
    }

    let label = language_label.unwrap_or_else(|| DEFAULT_LANGUAGE_LABEL.to_string());
    let Some(locale) = resolve_language_choice(&label) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Unsupported language: {}", label.trim()),
        );
    };

    let input = InputBundle {
        audio,
        image,
        text_file,
        output_locale: locale,
    };

    let run_id = RunId::new();
    tracing::info!(
        request_id = %request_id,
        run_id = %run_id,
        locale = %input.output_locale,
        has_audio = input.audio.is_some(),
        has_image = input.image.is_some(),
        has_text = input.text_file.is_some(),
        "Diagnosis requested"
    );

    let language = input.output_locale.to_string();
    match state.pipeline.run(run_id, &input).await {
        Ok(artifact) => {
            (StatusCode::OK, Json(DiagnoseResponse::from_artifact(artifact, language))).into_response()
        }
        Err(PipelineError::EmptyInput) => error_response(
            StatusCode::BAD_REQUEST,
            "Provide a voice recording, a symptom text file or an image",
        ),
        Err(e) => {
            tracing::error!(error = %e, run_id = %run_id, "Diagnosis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Diagnosis failed")
        }
    }
}
