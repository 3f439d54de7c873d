//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::models::{ContactResponse, ContactSubmission};
use crate::{AppResult, AppState};

/// POST /api/v1/contact
pub async fn submit(
    State(state): State<AppState>,
    req: Result<Json<ContactSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    let Json(req) = req?;
    let stored = state.contacts.submit(req).await?;
    Ok((StatusCode::CREATED, Json(ContactResponse::from(&stored))))
}
