//! Type conversions between nightingale and generateContent formats.

use crate::dto::{Content, GenerateContentRequest, GenerationConfig, Part};
use nightingale_core::{GenerationOptions, GenerationRequest, Role, Turn};

/// Maps a conversation role to its wire token.
///
/// The generateContent vocabulary has only two speakers, so everything
/// that is not the user collapses to "model". This mapping is total: any
/// role produces a valid token.
pub fn role_token(role: &Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant | Role::System => "model",
    }
}

/// Converts turns into role-tagged content blocks, preserving order.
pub fn to_contents(turns: &[Turn]) -> Vec<Content> {
    turns
        .iter()
        .map(|turn| Content {
            role: role_token(turn.role()).to_string(),
            parts: vec![Part {
                text: turn.content().clone(),
            }],
        })
        .collect()
}

/// Converts sampling options into the wire casing.
pub fn to_generation_config(options: &GenerationOptions) -> GenerationConfig {
    GenerationConfig {
        temperature: *options.temperature(),
        top_p: *options.top_p(),
        max_output_tokens: *options.max_output_tokens(),
    }
}

/// Builds the complete generateContent request body.
pub fn to_generate_content_request(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: to_contents(request.turns()),
        generation_config: to_generation_config(request.options()),
    }
}
