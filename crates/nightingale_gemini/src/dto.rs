//! Data transfer objects for the generateContent wire format.

use serde::Serialize;

/// A single text part inside a content block.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// Part text
    pub text: String,
}

/// A role-tagged content block.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Wire role: "user" or "model"
    pub role: String,
    /// Ordered parts of the block
    pub parts: Vec<Part>,
}

/// Sampling parameters in the wire casing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling probability mass
    pub top_p: f32,
    /// Cap on generated tokens, omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// The generateContent request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, oldest first
    pub contents: Vec<Content>,
    /// Sampling parameters
    pub generation_config: GenerationConfig,
}
