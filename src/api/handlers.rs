// src/api/handlers.rs

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::api::{types::*, AppState};
use crate::infra::errors::ChatGateError;

/// POST /chat — Forward a message to the selected provider.
///
/// The body is parsed by hand so that a malformed payload is reported the
/// same way as a provider failure: 500 with `{"error": ...}`.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let request: ChatMessageRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected chat body: {}", e);
        internal_error(ChatGateError::InvalidRequest(e.to_string()))
    })?;

    let kind = request.provider_kind();
    let message = request.message.unwrap_or_default();

    match state.dispatcher.send_message(&message, kind).await {
        Ok(response) => Ok(Json(ChatReply { response })),
        Err(e) => {
            tracing::warn!(provider = %kind, "Chat request failed: {}", e);
            Err(internal_error(e))
        }
    }
}

/// GET /health — Simple health check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
