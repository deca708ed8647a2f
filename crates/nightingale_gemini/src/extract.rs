//! Reply extraction from generateContent response bodies.
//!
//! The API contract puts reply text at `candidates[0].content.parts[0].text`.
//! Extraction is fail-open: a body that deviates from that shape in any way
//! becomes displayable placeholder text carrying the raw body, never an
//! error. This keeps the conversation loop alive when the API returns an
//! empty candidate list or a shape this client does not know.

use serde_json::Value;

/// Result of probing a response body for reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The reply text found at the expected path
    Text(String),
    /// Placeholder text for a body with no reply at the expected path
    Unrecognized(String),
}

impl Extraction {
    /// Unwraps into displayable text, whichever variant this is.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Unrecognized(placeholder) => placeholder,
        }
    }

    /// True when the body matched the expected shape.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Extraction::Text(_))
    }
}

/// Probes a parsed response body for reply text.
///
/// Only the exact path `candidates[0].content.parts[0].text` counts as a
/// recognized reply, and it must hold a string. Anything else, including
/// an empty `candidates` array, yields [`Extraction::Unrecognized`] with
/// the whole body embedded in the placeholder.
pub fn reply_text(body: &Value) -> Extraction {
    let text = body
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str);

    match text {
        Some(text) => Extraction::Text(text.to_string()),
        None => Extraction::Unrecognized(unrecognized_placeholder(body)),
    }
}

/// Formats the placeholder shown in place of a reply.
fn unrecognized_placeholder(body: &Value) -> String {
    let raw = serde_json::to_string(body).unwrap_or_default();
    format!("エラー: 予期しないAPI応答形式です。{raw}")
}
