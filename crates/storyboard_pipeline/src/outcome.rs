//! Result of a single storyboard run.

use storyboard_core::StoryboardItem;
use storyboard_error::PipelineError;

/// How a call to [`StoryboardPipeline::run`](crate::StoryboardPipeline::run) ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Blank script or a run already active; nothing happened
    Skipped,
    /// Every scene was rendered
    Completed(Vec<StoryboardItem>),
    /// The run stopped at the first failure
    Aborted {
        /// Panels published before the failure
        items: Vec<StoryboardItem>,
        /// Why the run stopped
        error: PipelineError,
    },
}

impl RunOutcome {
    /// Panels produced by the run, empty when skipped.
    pub fn items(&self) -> &[StoryboardItem] {
        match self {
            RunOutcome::Skipped => &[],
            RunOutcome::Completed(items) => items,
            RunOutcome::Aborted { items, .. } => items,
        }
    }

    /// The failure that aborted the run, if any.
    pub fn error(&self) -> Option<&PipelineError> {
        match self {
            RunOutcome::Aborted { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True when the run was dropped at entry.
    pub fn is_skipped(&self) -> bool {
        matches!(self, RunOutcome::Skipped)
    }

    /// True when every scene was rendered.
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}
