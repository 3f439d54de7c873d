//! Generative-text provider boundary

use async_trait::async_trait;
use schemars::schema::RootSchema;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured for {0}")]
    MissingCredentials(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("provider request timed out")]
    Timeout,

    #[error("provider rejected credentials (HTTP {0})")]
    Unauthorized(u16),

    #[error("provider rate limit exceeded")]
    RateLimited,

    #[error("provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("could not encode provider request: {0}")]
    Encode(String),

    #[error("could not decode provider reply: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Something that turns a prompt into data matching a JSON schema.
///
/// Implementations make a single attempt per call; a returned value is
/// whatever the provider produced and still has to be checked by the caller.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str, schema: &RootSchema) -> Result<Value, ProviderError>;
}
