//! Gemini-specific error types.

/// Gemini-specific error conditions.
///
/// The three generation-time variants are disjoint so callers can branch on
/// kind: `Api` means the endpoint answered and rejected the request,
/// `Transport` means it never answered (unreachable or timed out), and
/// `Unexpected` covers everything else that can go wrong around the call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Endpoint reachable but returned a non-success HTTP status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned with the rejection
        body: String,
    },
    /// Endpoint unreachable, connection failed, or the request timed out
    Transport(String),
    /// Any other failure during the call or its surrounding logic
    Unexpected(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::Api { status, body } => {
                write!(f, "HTTP {} error: {}", status, body)
            }
            GeminiErrorKind::Transport(msg) => {
                write!(f, "Gemini API request failed: {}", msg)
            }
            GeminiErrorKind::Unexpected(msg) => {
                write!(f, "Unexpected Gemini failure: {}", msg)
            }
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use nightingale_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The kind of failure, for callers that branch on it.
    pub fn kind(&self) -> &GeminiErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
