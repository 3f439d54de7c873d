//! AI scoring explanation
//!
//! Turns a Secure 360 feature name into a marketing explanation using an
//! external generative-text provider.

pub mod explanation;
pub mod gemini;
pub mod prompt;
pub mod provider;
pub mod schema;

pub use explanation::{ExplainError, ExplanationService};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use provider::{ProviderError, TextProvider};
pub use schema::ExplanationResponse;
