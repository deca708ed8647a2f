//! Text generation trait definitions.

use async_trait::async_trait;
use nightingale_core::GenerationRequest;
use nightingale_error::NightingaleResult;

/// Trait for LLM backends that turn a conversation into reply text.
///
/// Generic front-ends take `D: TextGenerator` so different backends (or
/// scripted test doubles) can stand behind the same UI.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate reply text for the given request.
    ///
    /// A successful return is always displayable text: backends resolve
    /// unrecognized response shapes to placeholder text rather than an
    /// error, so `Err` is reserved for transport, API, and parse failures.
    async fn generate(&self, request: &GenerationRequest) -> NightingaleResult<String>;
}
