//! AI scoring explanation handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::ai::ExplanationResponse;
use crate::{AppResult, AppState};

/// POST /api/v1/ai/scoring-explanation
///
/// Takes the body untyped so a missing or non-text `feature` is reported by
/// the service's input check. Bodies that are not JSON at all are rejected
/// with the same error payload.
pub async fn scoring_explanation(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ExplanationResponse>> {
    let Json(body) = body?;
    let response = state.explainer.explain_value(body).await?;
    Ok(Json(response))
}
