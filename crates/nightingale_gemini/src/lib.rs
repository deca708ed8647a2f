//! Gemini generateContent client for nightingale.
//!
//! This crate owns everything between a [`GenerationRequest`](nightingale_core::GenerationRequest)
//! and displayable reply text: the wire DTOs, the role and option
//! conversions, the fail-open response extractor, and the HTTP client
//! itself.

mod client;
mod config;
pub mod conversions;
mod dto;
pub mod extract;

pub use client::GeminiClient;
pub use config::{
    API_KEY_VAR, API_VERSION_VAR, BASE_URL_VAR, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT, GeminiConfig,
};
pub use dto::{Content, GenerateContentRequest, GenerationConfig, Part};
pub use extract::Extraction;
