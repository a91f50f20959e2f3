//! Model backends for the storyboard pipeline.
//!
//! [`GeminiClient`] implements all three collaborator traits against the
//! Gemini REST API:
//!
//! - [`SceneParser`](storyboard_interface::SceneParser) via `generateContent`
//!   with a JSON response schema
//! - [`ImageSynthesizer`](storyboard_interface::ImageSynthesizer) via the
//!   Imagen `predict` endpoint
//! - [`AssistantBackend`](storyboard_interface::AssistantBackend) via
//!   `generateContent` with client-side history
//!
//! # Example
//!
//! ```no_run
//! use storyboard_core::StoryboardConfig;
//! use storyboard_interface::SceneParser;
//! use storyboard_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = GeminiClient::new(config.gemini)?;
//! let scenes = client.parse_script("INT. COFFEE SHOP - DAY ...").await?;
//! println!("{} scenes", scenes.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{GeminiChatSession, GeminiClient, GeminiResult};
