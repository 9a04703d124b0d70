//! # API Route Handlers
//!
//! The Axum handlers for the moderation proxy: the informational root and
//! health endpoints, the `/api/moderate` POST handler, and the 405 fallback.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use safeguard::{moderate_content, AnalysisContent, AnalysisResult};
use serde_json::json;
use tracing::info;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "safeguard server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/api/moderate` endpoint.
///
/// Forwards the submitted content to the moderation model with the policy
/// instruction and schema constraint, then relays the structured verdict.
/// The content itself is never logged.
pub async fn moderate_handler(
    State(app_state): State<AppState>,
    Json(content): Json<AnalysisContent>,
) -> Result<Json<AnalysisResult>, AppError> {
    info!(
        has_text = content.text.is_some(),
        has_image = content.image.is_some(),
        "Received moderation request"
    );

    let result = moderate_content(app_state.provider.as_ref(), &content).await?;

    Ok(Json(result))
}

/// Answers any wrong-method request on a known route.
pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
