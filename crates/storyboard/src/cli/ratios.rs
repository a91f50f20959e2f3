//! Aspect ratio listing.

use storyboard::{AspectRatio, StoryboardConfig};
use strum::IntoEnumIterator;

/// Print every supported aspect ratio, marking the configured default.
pub fn list_aspect_ratios(config: &StoryboardConfig) {
    for ratio in AspectRatio::iter() {
        let marker = if ratio == config.pipeline.default_aspect_ratio {
            " (default)"
        } else {
            ""
        };
        println!("{:<5} {}{}", ratio.as_ref(), ratio.label(), marker);
    }
}
