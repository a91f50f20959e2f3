//! Observable state of a storyboard run.

use crate::ImageData;
use serde::{Deserialize, Serialize};

/// One generated panel: the prompt and the image it produced.
///
/// # Examples
///
/// ```
/// use storyboard_core::{ImageData, StoryboardItem};
///
/// let item = StoryboardItem::new("woman in cafe", ImageData::new("image/jpeg", vec![1]));
/// assert_eq!(item.prompt, "woman in cafe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryboardItem {
    /// The scene's visual prompt, without the style suffix
    pub prompt: String,
    /// The rendered image
    pub image: ImageData,
}

impl StoryboardItem {
    /// Create a panel.
    pub fn new(prompt: impl Into<String>, image: ImageData) -> Self {
        Self {
            prompt: prompt.into(),
            image,
        }
    }
}

/// Snapshot of the pipeline's run state.
///
/// `storyboard` is append-only during a run and is reset when a run starts,
/// so every snapshot holds a prefix of that run's final sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    /// A run is in progress
    pub running: bool,
    /// Transient progress text; empty when idle
    pub progress_message: String,
    /// User-facing message of the last run's failure
    pub last_error: Option<String>,
    /// Panels published so far
    pub storyboard: Vec<StoryboardItem>,
}

impl RunState {
    /// True when no run is active and no progress is shown.
    pub fn is_idle(&self) -> bool {
        !self.running && self.progress_message.is_empty()
    }
}
