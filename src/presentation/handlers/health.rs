use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub output_dir_ready: bool,
}

/// Reports 503 once the artifact directory is gone, since every run writes there.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let output_dir_ready = state.settings.output.directory.is_dir();
    let (status_code, status) = if output_dir_ready {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            output_dir_ready,
        }),
    )
}
