//! Secure 360 Landing Backend
//!
//! Server side of the Secure 360 marketing site by Sedge Enterprise.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SECURE 360 LANDING                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────┐  ┌───────────────────┐ │
//! │  │  API      │  │  AI Scoring     │  │  Contact Intake   │ │
//! │  │  Gateway  │  │  Explanation    │  │  + Landing        │ │
//! │  │  (Axum)   │  │  Service        │  │    Content        │ │
//! │  └─────┬─────┘  └────────┬────────┘  └───────────────────┘ │
//! │        └─────────────────┤                                  │
//! │                          ▼                                  │
//! │                ┌──────────────────┐                        │
//! │                │  Gemini API      │                        │
//! │                └──────────────────┘                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod ai;
mod config;
mod models;
mod handlers;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ai::{ExplanationService, GeminiConfig, GeminiProvider};
use models::ContactStore;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "secure360_site=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env();

    tracing::info!("Secure 360 landing backend starting...");
    tracing::info!("AI provider: gemini ({})", config.gemini_model);
    if !config.api_key_present() {
        if config.is_production() {
            anyhow::bail!("GEMINI_API_KEY is required in production");
        }
        tracing::warn!("No Gemini API key configured; AI scoring explanations will fail");
    }

    let provider = GeminiProvider::new(GeminiConfig::from(&config))
        .context("Failed to create AI provider client")?;

    // Build application state
    let state = AppState {
        explainer: Arc::new(ExplanationService::new(Arc::new(provider))),
        contacts: Arc::new(ContactStore::new(config.contact_store_path.clone())),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub explainer: Arc<ExplanationService>,
    pub contacts: Arc<ContactStore>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // AI scoring explanation
        .route("/api/v1/ai/scoring-explanation", post(handlers::explain::scoring_explanation))

        // Contact form
        .route("/api/v1/contact", post(handlers::contact::submit))

        // Landing content
        .route("/api/v1/content/features", get(handlers::content::features))
        .route("/api/v1/content/images/:id", get(handlers::content::image));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[cfg(test)]
fn test_state(provider: Arc<dyn ai::TextProvider>) -> AppState {
    AppState {
        explainer: Arc::new(ExplanationService::new(provider)),
        contacts: Arc::new(ContactStore::new(None)),
        config: config::Config::default(),
    }
}
