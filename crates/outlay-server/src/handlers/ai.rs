//! AI backend status handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use outlay_core::ai::AiBackend;

#[derive(Serialize)]
pub struct AiHealthResponse {
    pub configured: bool,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// GET /api/ai/health - Whether an AI backend is configured and responding
pub async fn ai_health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AiHealthResponse>, AppError> {
    let response = match state.ai.as_ref() {
        Some(client) => AiHealthResponse {
            configured: true,
            reachable: client.health_check().await,
            host: Some(client.host().to_string()),
            model: Some(client.model().to_string()),
        },
        None => AiHealthResponse {
            configured: false,
            reachable: false,
            host: None,
            model: None,
        },
    };

    Ok(Json(response))
}
