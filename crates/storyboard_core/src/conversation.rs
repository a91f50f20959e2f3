//! Conversation log types.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
///
/// # Examples
///
/// ```
/// use storyboard_core::Speaker;
///
/// assert_ne!(Speaker::User, Speaker::Assistant);
/// assert_eq!(format!("{}", Speaker::Assistant), "Assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human
    User,
    /// The assistant backend (or the fallback reply)
    Assistant,
}

/// One message in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Who said it
    pub speaker: Speaker,
    /// What was said
    pub text: String,
}

impl Turn {
    /// A turn from the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// A turn from the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Snapshot of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    /// Append-only log of turns
    pub turns: Vec<Turn>,
    /// A message is awaiting the backend's reply
    pub sending: bool,
}
