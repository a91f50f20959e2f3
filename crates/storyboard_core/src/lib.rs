//! Core data types for the storyboard generation pipeline.
//!
//! This crate provides the data model shared by the collaborator traits,
//! the Gemini backend and the orchestration cores, plus the layered
//! configuration loaded from `storyboard.toml`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect_ratio;
mod config;
mod conversation;
mod media;
mod run_state;
mod scene;

pub use aspect_ratio::AspectRatio;
pub use config::{AssistantConfig, GeminiConfig, PipelineConfig, StoryboardConfig};
pub use conversation::{ConversationState, Speaker, Turn};
pub use media::ImageData;
pub use run_state::{RunState, StoryboardItem};
pub use scene::Scene;
