//! Request/response types for the AI scoring explanation
//!
//! Both types are checked at the boundary: caller input through
//! `ExplanationRequest::from_value`, provider replies through
//! `ExplanationResponse::from_reply`. The JSON schema of the response is the
//! output contract handed to the provider.

use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExplanationRequest {
    #[schemars(description = "The AI scoring feature in Secure 360.")]
    pub feature: String,
}

impl ExplanationRequest {
    pub fn new(feature: impl Into<String>) -> Self {
        Self { feature: feature.into() }
    }

    /// Build from an untyped caller document. Extra fields are ignored.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExplanationResponse {
    #[schemars(
        description = "A detailed explanation of how the AI scoring feature prioritizes security alerts and why it matters."
    )]
    pub explanation: String,
}

impl ExplanationResponse {
    /// Build from a provider reply. An absent, null or non-text
    /// `explanation` is an error, never an empty string.
    pub fn from_reply(reply: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(reply)
    }
}

/// Output contract sent along with every prompt
pub fn output_schema() -> RootSchema {
    schema_for!(ExplanationResponse)
}
