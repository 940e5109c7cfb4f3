use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{AppState, MessageResponse};

/// GET /
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from Planetary!"))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<MessageResponse>) {
    match state.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("ok"))),
        Err(e) => {
            tracing::error!("Health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(MessageResponse::new("database unavailable")),
            )
        }
    }
}
