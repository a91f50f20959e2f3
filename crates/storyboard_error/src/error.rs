//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, JsonError, PipelineError, StorageError};

/// Every error condition in the workspace.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, JsonError};
///
/// let json_err = JsonError::new("storyboard.json", "unexpected token");
/// let err: StoryboardError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Storyboard run aborted
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Panel output error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Sources("storyboard.toml: expected `=`".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
