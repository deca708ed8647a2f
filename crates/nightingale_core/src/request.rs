//! Request types for text generation.

use crate::Turn;
use serde::{Deserialize, Serialize};

/// Sampling controls forwarded with every generation request.
///
/// Defaults mirror the values the front-ends start from: temperature 0.7,
/// top-p 0.8, and no explicit output-token cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationOptions {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability mass
    top_p: f32,
    /// Optional cap on generated tokens
    max_output_tokens: Option<u32>,
}

impl GenerationOptions {
    /// Creates options with explicit values.
    pub fn new(temperature: f32, top_p: f32, max_output_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            top_p,
            max_output_tokens,
        }
    }

    /// Replaces the temperature, keeping the other settings.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replaces the output-token cap, keeping the other settings.
    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            max_output_tokens: None,
        }
    }
}

/// A complete generation request: model, ordered turns, and sampling options.
///
/// # Examples
///
/// ```
/// use nightingale_core::{GenerationRequest, Role, Turn};
///
/// let request = GenerationRequest::builder()
///     .model("gemini-2.5-flash")
///     .turns(vec![Turn::new(Role::User, "こんにちは".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gemini-2.5-flash");
/// assert_eq!(request.turns().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Model name as it appears in the request URL
    model: String,
    /// Conversation turns, oldest first
    turns: Vec<Turn>,
    /// Sampling options
    #[builder(default)]
    options: GenerationOptions,
}

impl GenerationRequest {
    /// Creates a new request with the given model, turns, and options.
    pub fn new(model: String, turns: Vec<Turn>, options: GenerationOptions) -> Self {
        Self {
            model,
            turns,
            options,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}
