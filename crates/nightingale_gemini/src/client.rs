//! HTTP client for the Gemini generateContent API.

use crate::config::GeminiConfig;
use crate::{conversions, extract};
use async_trait::async_trait;
use nightingale_core::GenerationRequest;
use nightingale_error::{GeminiError, GeminiErrorKind, NightingaleResult};
use nightingale_interface::TextGenerator;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Client for the Gemini generateContent endpoint.
///
/// One call per user action: the whole conversation travels in each request
/// and the reply comes back in one response body. The request timeout lives
/// on the underlying HTTP client, so a single `GeminiClient` serves one
/// front-end with one latency budget.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Transport` error if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::Transport(format!(
                    "failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> Result<Self, GeminiError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// The active configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Sends the conversation and returns displayable reply text.
    ///
    /// A body that parses as JSON but holds no reply at the expected path
    /// still succeeds, returning placeholder text with the body embedded.
    ///
    /// # Errors
    ///
    /// - `Api` when the endpoint returns a non-success status
    /// - `Transport` when the exchange never completes (unreachable, timed
    ///   out before or during the reply body)
    /// - `Unexpected` when the response body is not JSON
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<String, GeminiError> {
        let url = self.config.generate_content_url(request.model());
        let body = conversions::to_generate_content_request(request);

        debug!(
            model = %request.model(),
            turn_count = request.turns().len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GeminiError::new(GeminiErrorKind::Api {
                status: status.as_u16(),
                body: error_text,
            }));
        }

        let parsed: Value = response.json().await.map_err(|e| {
            // A timeout can also fire here, after headers but mid-body.
            if e.is_timeout() || e.is_connect() {
                error!(error = ?e, "Connection lost while reading response body");
                GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
            } else {
                error!(error = ?e, "Failed to parse response body as JSON");
                GeminiError::new(GeminiErrorKind::Unexpected(format!(
                    "failed to parse response JSON: {}",
                    e
                )))
            }
        })?;

        let extraction = extract::reply_text(&parsed);
        if !extraction.is_recognized() {
            error!("Response body did not match the expected candidate shape");
        } else {
            debug!("Received reply text");
        }

        Ok(extraction.into_text())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> NightingaleResult<String> {
        Ok(self.generate_content(request).await?)
    }
}
