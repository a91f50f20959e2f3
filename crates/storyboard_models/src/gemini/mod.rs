//! Google Gemini REST backend.

mod chat;
mod client;
mod conversion;
mod dto;

pub use chat::GeminiChatSession;
pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storyboard_error::GeminiError>;
