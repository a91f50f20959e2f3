//! Mock collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyboard_core::{AspectRatio, ImageData, RunState, Scene};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardResult};
use storyboard_interface::{AssistantBackend, AssistantSession, ImageSynthesizer, SceneParser};
use tokio::sync::{Notify, watch};

/// Build a scene.
pub fn scene(number: u32, description: &str, visual_prompt: &str) -> Scene {
    Scene::new(number, description, visual_prompt)
}

/// The image the mock synthesizer renders for a styled prompt.
pub fn image_for(prompt: &str) -> ImageData {
    ImageData::new("image/jpeg", prompt.as_bytes().to_vec())
}

/// Mock scene parser.
pub struct MockParser {
    result: Result<Vec<Scene>, GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
    state: Mutex<Option<watch::Receiver<RunState>>>,
    observed: Mutex<Vec<ObservedState>>,
}

impl MockParser {
    /// Always return these scenes.
    pub fn new_success(scenes: Vec<Scene>) -> Self {
        Self {
            result: Ok(scenes),
            call_count: Arc::new(Mutex::new(0)),
            state: Mutex::new(None),
            observed: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            result: Err(error),
            call_count: Arc::new(Mutex::new(0)),
            state: Mutex::new(None),
            observed: Mutex::new(Vec::new()),
        }
    }

    /// Number of times parse_script() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Record the published run state at every call.
    pub fn observe(&self, receiver: watch::Receiver<RunState>) {
        *self.state.lock().unwrap() = Some(receiver);
    }

    /// States recorded by [`observe`](Self::observe).
    pub fn observed(&self) -> Vec<ObservedState> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl SceneParser for MockParser {
    async fn parse_script(&self, _script: &str) -> StoryboardResult<Vec<Scene>> {
        *self.call_count.lock().unwrap() += 1;
        record(&self.state, &self.observed);
        match &self.result {
            Ok(scenes) => Ok(scenes.clone()),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

/// Published state seen by a mock when it was called.
#[derive(Debug, Clone)]
pub struct ObservedState {
    pub panels: usize,
    pub progress: String,
    pub running: bool,
    pub last_error: Option<String>,
}

fn record(
    receiver: &Mutex<Option<watch::Receiver<RunState>>>,
    observed: &Mutex<Vec<ObservedState>>,
) {
    if let Some(receiver) = receiver.lock().unwrap().as_ref() {
        let state = receiver.borrow();
        observed.lock().unwrap().push(ObservedState {
            panels: state.storyboard.len(),
            progress: state.progress_message.clone(),
            running: state.running,
            last_error: state.last_error.clone(),
        });
    }
}

/// Mock image synthesizer.
///
/// Renders [`image_for`] the prompt it receives, optionally failing on one
/// call or blocking until released.
pub struct MockSynthesizer {
    fail_on_call: Option<usize>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<(String, AspectRatio)>>,
    observed: Mutex<Vec<ObservedState>>,
    state: Mutex<Option<watch::Receiver<RunState>>>,
}

impl MockSynthesizer {
    /// Always succeed.
    pub fn new_success() -> Self {
        Self {
            fail_on_call: None,
            gate: None,
            calls: Mutex::new(Vec::new()),
            observed: Mutex::new(Vec::new()),
            state: Mutex::new(None),
        }
    }

    /// Fail on the given 1-based call, succeed otherwise.
    pub fn new_failing_at(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new_success()
        }
    }

    /// Wait on `gate` before every call completes.
    pub fn new_gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new_success()
        }
    }

    /// Record the published run state at every call.
    pub fn observe(&self, receiver: watch::Receiver<RunState>) {
        *self.state.lock().unwrap() = Some(receiver);
    }

    /// Number of times synthesize() was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(prompt, _)| prompt.clone())
            .collect()
    }

    /// Aspect ratios received, in call order.
    pub fn aspect_ratios(&self) -> Vec<AspectRatio> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, ratio)| *ratio)
            .collect()
    }

    /// States recorded by [`observe`](Self::observe).
    pub fn observed(&self) -> Vec<ObservedState> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> StoryboardResult<ImageData> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((prompt.to_string(), aspect_ratio));
            calls.len()
        };

        record(&self.state, &self.observed);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail_on_call == Some(call) {
            return Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into());
        }

        Ok(image_for(prompt))
    }
}

/// Mock chat session sharing its counters with the backend that created it.
pub struct MockAssistantSession {
    replies: Arc<Mutex<Vec<Result<String, GeminiErrorKind>>>>,
    messages: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

#[async_trait]
impl AssistantSession for MockAssistantSession {
    async fn send(&mut self, message: &str) -> StoryboardResult<String> {
        self.messages.lock().unwrap().push(message.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                Ok(format!("echo: {}", message))
            } else {
                replies.remove(0)
            }
        };
        next.map_err(|kind| GeminiError::new(kind).into())
    }
}

/// Mock assistant backend.
pub struct MockAssistantBackend {
    start_failures: Arc<Mutex<usize>>,
    start_count: Arc<Mutex<usize>>,
    instructions: Arc<Mutex<Vec<(String, String)>>>,
    replies: Arc<Mutex<Vec<Result<String, GeminiErrorKind>>>>,
    messages: Arc<Mutex<Vec<String>>>,
    gate: Option<Arc<Notify>>,
}

impl MockAssistantBackend {
    /// Sessions reply with the given sequence, then echo.
    pub fn new_sequence(replies: Vec<Result<String, GeminiErrorKind>>) -> Self {
        Self {
            start_failures: Arc::new(Mutex::new(0)),
            start_count: Arc::new(Mutex::new(0)),
            instructions: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(replies)),
            messages: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Sessions echo, waiting on `gate` before each reply.
    pub fn new_gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new_sequence(Vec::new())
        }
    }

    /// The first `count` attempts to establish a session fail.
    pub fn new_failing_start(count: usize) -> Self {
        let backend = Self::new_sequence(Vec::new());
        *backend.start_failures.lock().unwrap() = count;
        backend
    }

    /// Number of start_session() calls, successful or not.
    pub fn start_count(&self) -> usize {
        *self.start_count.lock().unwrap()
    }

    /// (system_instruction, model) pairs passed to start_session().
    pub fn instructions(&self) -> Vec<(String, String)> {
        self.instructions.lock().unwrap().clone()
    }

    /// Messages delivered to sessions.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantBackend for MockAssistantBackend {
    type Session = MockAssistantSession;

    async fn start_session(
        &self,
        system_instruction: &str,
        model: &str,
    ) -> StoryboardResult<MockAssistantSession> {
        *self.start_count.lock().unwrap() += 1;
        self.instructions
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), model.to_string()));

        let mut failures = self.start_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        Ok(MockAssistantSession {
            replies: Arc::clone(&self.replies),
            messages: Arc::clone(&self.messages),
            gate: self.gate.clone(),
        })
    }
}
