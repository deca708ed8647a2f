//! Error types for the nightingale Gemini front-ends.
//!
//! This crate provides the foundation error types used across the nightingale
//! workspace. Errors carry their creation site (file and line) captured via
//! `#[track_caller]`, and the top-level [`NightingaleError`] wraps a boxed
//! kind enum so the type stays cheap to move through `Result` chains.

mod config;
mod gemini;
mod storage;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use storage::StorageError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum NightingaleErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Gemini client error
    Gemini(GeminiError),
    /// Export artifact storage error
    Storage(StorageError),
}

impl std::fmt::Display for NightingaleErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NightingaleErrorKind::Config(e) => write!(f, "{}", e),
            NightingaleErrorKind::Gemini(e) => write!(f, "{}", e),
            NightingaleErrorKind::Storage(e) => write!(f, "{}", e),
        }
    }
}

/// Nightingale error with kind discrimination.
#[derive(Debug)]
pub struct NightingaleError(Box<NightingaleErrorKind>);

impl NightingaleError {
    /// Create a new error from a kind.
    pub fn new(kind: NightingaleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NightingaleErrorKind {
        &self.0
    }
}

impl std::fmt::Display for NightingaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nightingale Error: {}", self.0)
    }
}

impl std::error::Error for NightingaleError {}

// Generic From implementation for any type that converts to NightingaleErrorKind
impl<T> From<T> for NightingaleError
where
    T: Into<NightingaleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for nightingale operations.
pub type NightingaleResult<T> = std::result::Result<T, NightingaleError>;
