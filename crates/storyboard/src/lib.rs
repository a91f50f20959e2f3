//! Storyboard - illustrated storyboards from free-text scripts
//!
//! A script is segmented into scenes by a language model, each scene is
//! rendered to an image, and panels are published one at a time as they
//! arrive. A side conversation with an assistant is available for help
//! with the storyboard.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyboard::{AspectRatio, GeminiClient, StoryboardConfig, StoryboardPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryboardConfig::load()?;
//!     let client = GeminiClient::new(config.gemini.clone())?;
//!     let pipeline = StoryboardPipeline::from_config(client.clone(), client, &config.pipeline);
//!
//!     let outcome = pipeline.run("EXT. HARBOR - DAWN. A ship docks.", AspectRatio::Widescreen).await;
//!     println!("{} panels", outcome.items().len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Data model and configuration
//! - `storyboard_interface` - Scene parser, image synthesizer and assistant traits
//! - `storyboard_models` - Gemini implementations
//! - `storyboard_pipeline` - Run orchestration and conversation sessions
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use storyboard_core::*;
pub use storyboard_error::*;
pub use storyboard_interface::*;
pub use storyboard_models::{GeminiChatSession, GeminiClient};
pub use storyboard_pipeline::{ConversationSession, PARSING_MESSAGE, RunOutcome, StoryboardPipeline};

pub mod observability;
mod output;
mod runner;

pub use output::{MANIFEST_FILE, Manifest, ManifestPanel, StoryboardWriter};
pub use runner::{GenerationReport, QUIT_COMMAND, chat_over_lines, generate_storyboard};
