//! Error types for the storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, JsonError};
//!
//! fn fetch_data() -> StoryboardResult<String> {
//!     Err(JsonError::new("storyboard.json", "unexpected end of input"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod pipeline;
mod storage;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use storage::{StorageError, StorageErrorKind};
