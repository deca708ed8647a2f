//! Client configuration for the Gemini generateContent API.

use nightingale_error::{GeminiError, GeminiErrorKind};
use std::time::Duration;

/// Default endpoint for the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// API version segment used in request URLs.
pub const DEFAULT_API_VERSION: &str = "v1";
/// Default request timeout for interactive chat.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Optional environment override for the endpoint.
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
/// Optional environment override for the API version segment.
pub const API_VERSION_VAR: &str = "GEMINI_API_VERSION";

/// Connection settings for [`GeminiClient`](crate::GeminiClient).
///
/// # Examples
///
/// ```
/// use nightingale_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new("test-key")
///     .unwrap()
///     .with_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.timeout(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: String,
    base_url: String,
    api_version: String,
    timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration with the default endpoint and timeout.
    ///
    /// An empty or whitespace-only key is rejected the same way an unset
    /// environment variable is, so callers can treat both identically.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// `GEMINI_BASE_URL` and `GEMINI_API_VERSION`, when set and non-empty,
    /// override the endpoint defaults.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(api_version) = std::env::var(API_VERSION_VAR) {
            if !api_version.is_empty() {
                config.api_version = api_version;
            }
        }

        Ok(config)
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API version segment.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replaces the base URL, keeping the other settings.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the request timeout, keeping the other settings.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the `generateContent` URL for a model.
    ///
    /// The key travels as a query parameter, matching the REST API contract.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url, self.api_version, model, self.api_key
        )
    }
}
