//! Storyboard pipeline error types.
//!
//! The display text of each [`PipelineErrorKind`] is the message shown to
//! the user; the underlying cause is logged where the error is created.

/// Conditions that abort a storyboard run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// The scene parser returned no scenes
    #[display("Could not parse any scenes from the script. Please check the script format.")]
    EmptyParseResult,
    /// The scene parser backend call failed
    #[display("Failed to parse the script. The AI could not understand the format.")]
    ParseFailure,
    /// Image synthesis failed for one scene
    #[display("Failed to generate an image for the prompt.")]
    SynthesisFailure {
        /// 1-based position of the failing scene in the parsed order
        scene: usize,
    },
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::SynthesisFailure { scene: 2 });
/// assert_eq!(err.message(), "Failed to generate an image for the prompt.");
/// assert!(format!("{}", err).contains("at line"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing message, without location details.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
