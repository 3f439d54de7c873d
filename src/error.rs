//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

use crate::ai::{ExplainError, ProviderError};
use crate::models::ContactError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Resource errors
    NotFound(String),

    // Validation errors
    ValidationError(String),

    // AI provider errors
    ProviderBusy(String),
    ExternalServiceError(String),
    SchemaViolation(String),

    // Storage errors
    StorageError(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ProviderBusy(msg) => {
                tracing::warn!("AI provider busy: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "AI service is busy, please try again later")
            }
            AppError::ExternalServiceError(msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, "External service error")
            }
            AppError::SchemaViolation(msg) => {
                tracing::error!("AI reply rejected: {}", msg);
                (StatusCode::BAD_GATEWAY, "AI service returned an unexpected reply")
            }
            AppError::StorageError(msg) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Could not save your message. Please try again.")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ExplainError> for AppError {
    fn from(err: ExplainError) -> Self {
        match err {
            e @ ExplainError::Validation(_) => AppError::ValidationError(e.to_string()),
            ExplainError::Provider(ProviderError::RateLimited) => {
                AppError::ProviderBusy(ProviderError::RateLimited.to_string())
            }
            ExplainError::Provider(e) => AppError::ExternalServiceError(e.to_string()),
            ExplainError::SchemaViolation(e) => AppError::SchemaViolation(e.to_string()),
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Invalid(errors) => AppError::ValidationError(validation_message(&errors)),
            ContactError::Storage(e) => AppError::StorageError(e.to_string()),
            ContactError::Encode(e) => AppError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

/// Flatten field errors into one line, ordered by field name
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
