//! Configuration error types for startup wiring.

/// Error raised while preparing the runtime environment before a surface
/// launches, such as creating the log directory or opening the log file.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What failed to configure
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use nightingale_error::ConfigError;
    ///
    /// let err = ConfigError::new("failed to create log directory");
    /// assert!(err.to_string().contains("log directory"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
