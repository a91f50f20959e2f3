//! Trait definitions for the storyboard pipeline's external collaborators.
//!
//! The orchestration cores only talk to these traits, so any backend (the
//! Gemini client, a local model, a test double) can be plugged in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{AssistantBackend, AssistantSession, ImageSynthesizer, SceneParser};
