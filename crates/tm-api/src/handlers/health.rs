use axum::{extract::State, Json};
use serde_json::json;

use tm_common::embedding::{ModelPhase, TextEmbedder};

use crate::error::ApiError;
use crate::SharedState;

/// Liveness: static, never touches the model.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "tm-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness: 503 until the embedding model reaches `Ready`.
pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    match state.model.phase() {
        ModelPhase::Ready => {
            let embedder = state.model.embedder()?;
            Ok(Json(json!({
                "status": "ok",
                "model": {
                    "phase": "ready",
                    "name": embedder.name(),
                    "version": embedder.version(),
                    "dimension": embedder.dimension(),
                },
            })))
        }
        phase => Err(ApiError::ServiceUnavailable(format!(
            "embedding model not ready: {}",
            phase.as_str()
        ))),
    }
}
