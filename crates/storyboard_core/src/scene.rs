//! Scene descriptors produced by script segmentation.

use serde::{Deserialize, Serialize};

/// One segment of a script, with a prompt suitable for image generation.
///
/// Field names match the wire format requested from the text model.
///
/// # Examples
///
/// ```
/// use storyboard_core::Scene;
///
/// let scene = Scene::new(1, "intro", "woman in cafe");
/// assert_eq!(scene.scene_number, 1);
/// assert_eq!(scene.visual_prompt, "woman in cafe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scene {
    /// Scene number as reported by the parser (not validated against position)
    pub scene_number: u32,
    /// Short description of what happens in the scene
    pub description: String,
    /// Detailed prompt for the image generator
    pub visual_prompt: String,
}

impl Scene {
    /// Create a scene descriptor.
    pub fn new(
        scene_number: u32,
        description: impl Into<String>,
        visual_prompt: impl Into<String>,
    ) -> Self {
        Self {
            scene_number,
            description: description.into(),
            visual_prompt: visual_prompt.into(),
        }
    }
}
