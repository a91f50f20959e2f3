//! Configuration error types.

/// Ways loading `storyboard.toml` can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A layer could not be read or is not valid TOML
    #[display("Failed to read configuration sources: {}", _0)]
    Sources(String),
    /// The merged layers do not fit the configuration schema, e.g. an
    /// aspect ratio outside the supported set
    #[display("Invalid configuration value: {}", _0)]
    InvalidValue(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidValue(
///     "pipeline.default_aspect_ratio: unknown variant `2:1`".to_string(),
/// ));
/// assert!(matches!(err.kind, ConfigErrorKind::InvalidValue(_)));
/// assert!(err.to_string().contains("2:1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
