//! AI scoring explanation flow
//!
//! ```text
//! request ─► decode ─► prompt ─► provider ─► decode reply ─► response
//! ```
//!
//! Single shot: no retries, no fallback text, nothing cached.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use super::prompt;
use super::provider::{ProviderError, TextProvider};
use super::schema::{output_schema, ExplanationRequest, ExplanationResponse};

pub const FLOW_NAME: &str = "aiScoringExplanationFlow";

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("invalid explanation request: {0}")]
    Validation(#[source] serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("provider reply does not match the explanation schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

#[derive(Clone)]
pub struct ExplanationService {
    provider: Arc<dyn TextProvider>,
}

impl ExplanationService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Explain a feature from an untyped caller document.
    ///
    /// The document is checked before anything is sent to the provider.
    pub async fn explain_value(&self, input: Value) -> Result<ExplanationResponse, ExplainError> {
        let request = ExplanationRequest::from_value(input).map_err(|e| {
            tracing::debug!("Rejected explanation request: {}", e);
            ExplainError::Validation(e)
        })?;
        self.explain(&request).await
    }

    /// Explain a feature: one provider call, reply checked against the output schema
    pub async fn explain(&self, request: &ExplanationRequest) -> Result<ExplanationResponse, ExplainError> {
        let prompt = prompt::render(&request.feature);

        tracing::info!(
            flow = FLOW_NAME,
            prompt = prompt::PROMPT_NAME,
            provider = self.provider.name(),
            feature_len = request.feature.len(),
            "Requesting AI scoring explanation"
        );

        let reply = self
            .provider
            .generate(&prompt, &output_schema())
            .await
            .map_err(|e| {
                tracing::warn!(provider = self.provider.name(), "Provider call failed: {}", e);
                ExplainError::Provider(e)
            })?;

        let response = ExplanationResponse::from_reply(reply).map_err(|e| {
            tracing::warn!(provider = self.provider.name(), "Provider reply rejected: {}", e);
            ExplainError::SchemaViolation(e)
        })?;

        tracing::debug!(chars = response.explanation.len(), "Explanation generated");
        Ok(response)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use schemars::schema::RootSchema;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    /// Scripted provider that records every prompt it receives
    pub(crate) struct ScriptedProvider {
        reply: Mutex<Option<Result<Value, ProviderError>>>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        pub(crate) fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(Ok(reply))),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(err: ProviderError) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(Err(err))),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().len()
        }
    }

    #[async_trait]
    impl TextProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str, schema: &RootSchema) -> Result<Value, ProviderError> {
            assert_eq!(schema, &output_schema());
            self.prompts.lock().push(prompt.to_string());
            self.reply
                .lock()
                .take()
                .unwrap_or_else(|| Err(ProviderError::Network("no scripted reply left".to_string())))
        }
    }

    #[tokio::test]
    async fn test_explain_returns_reply_unmodified() {
        let text = "AI scoring ranks every alert by exploitability and blast radius.\n\nYou see the critical ones first.";
        let provider = ScriptedProvider::replying(json!({ "explanation": text }));
        let service = ExplanationService::new(provider.clone());

        let res = assert_ok!(service.explain(&ExplanationRequest::new("AI scoring")).await);

        assert_eq!(res, ExplanationResponse { explanation: text.to_string() });
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_prompt_contains_feature_and_template() {
        let provider = ScriptedProvider::replying(json!({ "explanation": "ok" }));
        let service = ExplanationService::new(provider.clone());

        assert_ok!(service.explain_value(json!({ "feature": "AI scoring" })).await);

        let prompts = provider.prompts.lock();
        let prompt = &prompts[0];
        let preamble = prompt
            .find("You are an AI expert explaining the AI scoring feature in Secure 360.")
            .unwrap();
        let feature = prompt.find("Feature: AI scoring").unwrap();
        let instruction = prompt
            .find("Explain how the AI scoring feature prioritizes security alerts and why it matters to a visitor of the Secure 360 landing page.")
            .unwrap();
        assert!(preamble < feature && feature < instruction);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_provider() {
        let provider = ScriptedProvider::replying(json!({ "explanation": "unused" }));
        let service = ExplanationService::new(provider.clone());

        for input in [
            json!({}),
            json!({ "feature": null }),
            json!({ "feature": 42 }),
            json!({ "feature": ["AI scoring"] }),
            json!("AI scoring"),
        ] {
            let err = assert_err!(service.explain_value(input.clone()).await);
            assert!(matches!(err, ExplainError::Validation(_)), "input {input}: {err:?}");
        }

        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_reply_without_explanation_is_schema_violation() {
        for reply in [
            json!({}),
            json!({ "explanation": null }),
            json!({ "explanation": 7 }),
            json!({ "text": "close but no" }),
            Value::Null,
            Value::String("plain prose".to_string()),
        ] {
            let provider = ScriptedProvider::replying(reply.clone());
            let service = ExplanationService::new(provider.clone());

            let err = assert_err!(service.explain(&ExplanationRequest::new("AI scoring")).await);
            assert!(matches!(err, ExplainError::SchemaViolation(_)), "reply {reply}: {err:?}");
            assert_eq!(provider.calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_provider_error_propagates_without_retry() {
        let provider = ScriptedProvider::failing(ProviderError::RateLimited);
        let service = ExplanationService::new(provider.clone());

        let err = assert_err!(service.explain(&ExplanationRequest::new("AI scoring")).await);

        assert!(matches!(err, ExplainError::Provider(ProviderError::RateLimited)));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_feature_is_accepted() {
        let provider = ScriptedProvider::replying(json!({ "explanation": "ok" }));
        let service = ExplanationService::new(provider.clone());

        assert_ok!(service.explain_value(json!({ "feature": "" })).await);
        assert!(provider.prompts.lock()[0].contains("Feature: \n"));
    }
}
