//! JSON error types.

/// A JSON document the workspace produces could not be encoded.
///
/// `document` names what was being written, such as the run manifest.
///
/// # Examples
///
/// ```
/// use storyboard_error::JsonError;
///
/// let err = JsonError::new("storyboard.json", "key must be a string");
/// assert_eq!(err.document, "storyboard.json");
/// assert!(err.to_string().starts_with("JSON Error in storyboard.json: key must be a string"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// Document being encoded
    pub document: String,
    /// Encoder message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError for `document` at the current location.
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
