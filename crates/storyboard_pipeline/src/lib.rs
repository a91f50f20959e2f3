//! Orchestration cores for storyboard generation.
//!
//! [`StoryboardPipeline`] turns a script into illustrated panels by driving a
//! [`SceneParser`](storyboard_interface::SceneParser) once and an
//! [`ImageSynthesizer`](storyboard_interface::ImageSynthesizer) once per
//! scene, publishing each panel as soon as it is rendered.
//! [`ConversationSession`] holds a free-form chat with an assistant backend.
//!
//! Both publish their state through `tokio::sync::watch`, so observers can
//! either [`subscribe`](StoryboardPipeline::subscribe) or take a snapshot.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_core::{AspectRatio, StoryboardConfig};
//! use storyboard_models::GeminiClient;
//! use storyboard_pipeline::{RunOutcome, StoryboardPipeline};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = GeminiClient::new(config.gemini.clone())?;
//! let pipeline = StoryboardPipeline::from_config(client.clone(), client, &config.pipeline);
//!
//! match pipeline.run("INT. CAFE - DAY. A woman waits.", AspectRatio::Widescreen).await {
//!     RunOutcome::Completed(items) => println!("{} panels", items.len()),
//!     RunOutcome::Aborted { error, .. } => eprintln!("{}", error.message()),
//!     RunOutcome::Skipped => {}
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conversation;
mod outcome;
mod pipeline;

pub use conversation::ConversationSession;
pub use outcome::RunOutcome;
pub use pipeline::{PARSING_MESSAGE, StoryboardPipeline};
