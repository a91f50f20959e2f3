//! Assistant conversation sessions.

use derive_getters::Getters;
use storyboard_core::{AssistantConfig, ConversationState, Turn};
use storyboard_error::StoryboardResult;
use storyboard_interface::{AssistantBackend, AssistantSession};
use tokio::sync::{Mutex, watch};
use tracing::{debug, instrument, warn};

/// A free-form chat with an assistant backend.
///
/// The backend session is established on the first message and reused for
/// the lifetime of this value. If establishing it fails, that turn gets the
/// fallback reply and the next message tries again.
#[derive(Getters)]
pub struct ConversationSession<B: AssistantBackend> {
    #[getter(skip)]
    backend: B,
    /// Assistant settings for this session
    config: AssistantConfig,
    #[getter(skip)]
    session: Mutex<Option<B::Session>>,
    #[getter(skip)]
    state: watch::Sender<ConversationState>,
}

impl<B: AssistantBackend> ConversationSession<B> {
    /// Create a conversation, opening the log with the configured greeting.
    pub fn new(backend: B, config: AssistantConfig) -> Self {
        let mut initial = ConversationState::default();
        if !config.greeting.is_empty() {
            initial.turns.push(Turn::assistant(config.greeting.clone()));
        }
        let (state, _) = watch::channel(initial);

        Self {
            backend,
            config,
            session: Mutex::new(None),
            state,
        }
    }

    /// Watch the conversation log.
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    /// Snapshot of the conversation log.
    pub fn state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    /// Send a user message and wait for the assistant's reply.
    ///
    /// Returns `None` without touching the log when the message is blank or
    /// another message is awaiting its reply. Backend failures never
    /// surface: the configured fallback reply is logged as the assistant's
    /// turn instead.
    #[instrument(skip(self, text), fields(model = %self.config.model))]
    pub async fn send_message(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let started = self.state.send_if_modified(|state| {
            if state.sending {
                return false;
            }
            state.turns.push(Turn::user(text));
            state.sending = true;
            true
        });
        if !started {
            debug!("Message already in flight, ignoring");
            return None;
        }

        let _guard = SendingGuard { state: &self.state };

        let reply = match self.exchange(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Assistant turn failed, using fallback reply");
                self.config.fallback_reply.clone()
            }
        };

        self.state
            .send_modify(|state| state.turns.push(Turn::assistant(reply.clone())));
        Some(reply)
    }

    async fn exchange(&self, text: &str) -> StoryboardResult<String> {
        let mut slot = self.session.lock().await;
        if let Some(session) = slot.as_mut() {
            return session.send(text).await;
        }

        debug!("Establishing assistant session");
        let session = self
            .backend
            .start_session(&self.config.system_instruction, &self.config.model)
            .await?;
        slot.insert(session).send(text).await
    }
}

struct SendingGuard<'a> {
    state: &'a watch::Sender<ConversationState>,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.sending = false);
    }
}
