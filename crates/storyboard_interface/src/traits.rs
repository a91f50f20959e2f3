//! Trait definitions for text, image and chat backends.

use async_trait::async_trait;
use storyboard_core::{AspectRatio, ImageData, Scene};
use storyboard_error::StoryboardResult;

/// Splits a free-form script into ordered scene descriptors.
#[async_trait]
pub trait SceneParser: Send + Sync {
    /// Parse `script` into scenes.
    ///
    /// An empty vector means nothing in the script could be parsed. The
    /// returned order is authoritative.
    async fn parse_script(&self, script: &str) -> StoryboardResult<Vec<Scene>>;
}

/// Renders one prompt to one image.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Render `prompt` at `aspect_ratio`.
    ///
    /// A backend that reports zero generated images must return an error.
    async fn synthesize(&self, prompt: &str, aspect_ratio: AspectRatio)
    -> StoryboardResult<ImageData>;
}

/// A stateful multi-turn exchange with an assistant.
#[async_trait]
pub trait AssistantSession: Send {
    /// Send one message and return the assistant's reply.
    async fn send(&mut self, message: &str) -> StoryboardResult<String>;
}

/// Creates assistant sessions.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Session handle type produced by this backend.
    type Session: AssistantSession;

    /// Establish a session bound to a persona instruction and model.
    async fn start_session(
        &self,
        system_instruction: &str,
        model: &str,
    ) -> StoryboardResult<Self::Session>;
}

#[async_trait]
impl<T: SceneParser + ?Sized> SceneParser for std::sync::Arc<T> {
    async fn parse_script(&self, script: &str) -> StoryboardResult<Vec<Scene>> {
        (**self).parse_script(script).await
    }
}

#[async_trait]
impl<T: ImageSynthesizer + ?Sized> ImageSynthesizer for std::sync::Arc<T> {
    async fn synthesize(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> StoryboardResult<ImageData> {
        (**self).synthesize(prompt, aspect_ratio).await
    }
}

#[async_trait]
impl<T: AssistantBackend + ?Sized> AssistantBackend for std::sync::Arc<T> {
    type Session = T::Session;

    async fn start_session(
        &self,
        system_instruction: &str,
        model: &str,
    ) -> StoryboardResult<Self::Session> {
        (**self).start_session(system_instruction, model).await
    }
}
