//! Test utilities for driver tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use storyboard::{
    AspectRatio, AssistantBackend, AssistantSession, GeminiError, GeminiErrorKind, ImageData,
    ImageSynthesizer, Scene, SceneParser, StoryboardResult,
};

/// Parser that always returns the same scenes.
pub struct FixedParser {
    scenes: Vec<Scene>,
}

impl FixedParser {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }
}

#[async_trait]
impl SceneParser for FixedParser {
    async fn parse_script(&self, _script: &str) -> StoryboardResult<Vec<Scene>> {
        Ok(self.scenes.clone())
    }
}

/// Synthesizer returning one JPEG byte per call, failing on one 1-based call.
pub struct CountingSynthesizer {
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
}

impl CountingSynthesizer {
    pub fn new_success() -> Self {
        Self {
            fail_on_call: None,
            calls: Mutex::new(0),
        }
    }

    pub fn new_failing_at(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ImageSynthesizer for CountingSynthesizer {
    async fn synthesize(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> StoryboardResult<ImageData> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.fail_on_call == Some(call) {
            return Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into());
        }
        Ok(ImageData::new("image/jpeg", vec![call as u8]))
    }
}

/// Backend whose sessions echo each message.
pub struct EchoBackend;

pub struct EchoSession;

#[async_trait]
impl AssistantSession for EchoSession {
    async fn send(&mut self, message: &str) -> StoryboardResult<String> {
        Ok(format!("echo: {}", message))
    }
}

#[async_trait]
impl AssistantBackend for EchoBackend {
    type Session = EchoSession;

    async fn start_session(
        &self,
        _system_instruction: &str,
        _model: &str,
    ) -> StoryboardResult<EchoSession> {
        Ok(EchoSession)
    }
}
