//! Stateful Gemini chat sessions.

use async_trait::async_trait;
use tracing::{debug, instrument};

use storyboard_error::StoryboardResult;
use storyboard_interface::AssistantSession;

use super::GeminiClient;
use super::conversion;
use super::dto::{Content, GenerateContentRequest};

/// A chat bound to one persona instruction and model.
///
/// History is kept client-side and replayed on each turn. A failed exchange
/// leaves the history unchanged.
#[derive(Debug, Clone)]
pub struct GeminiChatSession {
    client: GeminiClient,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl GeminiChatSession {
    pub(crate) fn new(client: GeminiClient, model: String, system_instruction: String) -> Self {
        Self {
            client,
            model,
            system_instruction,
            history: Vec::new(),
        }
    }

    /// Model this session talks to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Number of completed exchanges.
    pub fn exchanges(&self) -> usize {
        self.history.len() / 2
    }
}

#[async_trait]
impl AssistantSession for GeminiChatSession {
    #[instrument(skip(self, message), fields(model = %self.model, exchanges = self.exchanges()))]
    async fn send(&mut self, message: &str) -> StoryboardResult<String> {
        let user_turn = Content::text(Some("user"), message);

        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::text(None, self.system_instruction.as_str())),
            generation_config: None,
        };

        let response = self.client.generate_content(&self.model, &request).await?;
        let reply = conversion::response_text(&response)?;

        self.history.push(user_turn);
        self.history.push(Content::text(Some("model"), reply.as_str()));
        debug!(reply_len = reply.len(), "Assistant replied");

        Ok(reply)
    }
}
