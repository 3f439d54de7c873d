//! Landing content handlers

use axum::{extract::Path, Json};

use crate::models::{self, FeatureCard, PlaceholderImage};
use crate::{AppError, AppResult};

/// GET /api/v1/content/features
pub async fn features() -> Json<Vec<FeatureCard>> {
    Json(models::FEATURES.to_vec())
}

/// GET /api/v1/content/images/:id
pub async fn image(Path(id): Path<String>) -> AppResult<Json<PlaceholderImage>> {
    models::placeholder_image(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Image not found: {}", id)))
}
