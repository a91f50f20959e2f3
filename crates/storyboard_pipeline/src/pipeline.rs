//! Storyboard run orchestration.

use derive_getters::Getters;
use storyboard_core::{AspectRatio, PipelineConfig, RunState, StoryboardItem};
use storyboard_error::{PipelineError, PipelineErrorKind};
use storyboard_interface::{ImageSynthesizer, SceneParser};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::RunOutcome;

/// Progress text shown while the script is being segmented.
pub const PARSING_MESSAGE: &str = "Analyzing and parsing script...";

/// Drives one script through scene parsing and per-scene image synthesis.
///
/// At most one run is active per pipeline. Panels are appended to the
/// published [`RunState`] one at a time, in scene order, as they are rendered.
#[derive(Getters)]
pub struct StoryboardPipeline<P, S> {
    #[getter(skip)]
    parser: P,
    #[getter(skip)]
    synthesizer: S,
    /// Appended to every visual prompt sent to the synthesizer
    style_suffix: String,
    #[getter(skip)]
    state: watch::Sender<RunState>,
}

impl<P, S> StoryboardPipeline<P, S>
where
    P: SceneParser,
    S: ImageSynthesizer,
{
    /// Create a pipeline with an explicit style suffix.
    pub fn new(parser: P, synthesizer: S, style_suffix: impl Into<String>) -> Self {
        let (state, _) = watch::channel(RunState::default());
        Self {
            parser,
            synthesizer,
            style_suffix: style_suffix.into(),
            state,
        }
    }

    /// Create a pipeline from the `[pipeline]` configuration section.
    pub fn from_config(parser: P, synthesizer: S, config: &PipelineConfig) -> Self {
        Self::new(parser, synthesizer, config.style_suffix.clone())
    }

    /// Watch the run state.
    pub fn subscribe(&self) -> watch::Receiver<RunState> {
        self.state.subscribe()
    }

    /// Snapshot of the current run state.
    pub fn state(&self) -> RunState {
        self.state.borrow().clone()
    }

    /// True while a run is active.
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    /// Generate a storyboard for `script`.
    ///
    /// Returns [`RunOutcome::Skipped`] without touching any state when the
    /// script is blank or another run is active. Otherwise the previous
    /// storyboard and error are cleared, and the run proceeds until every
    /// scene is rendered or the first failure. Panels published before a
    /// failure are kept.
    #[instrument(skip(self, script), fields(script_len = script.len(), aspect_ratio = %aspect_ratio))]
    pub async fn run(&self, script: &str, aspect_ratio: AspectRatio) -> RunOutcome {
        if script.trim().is_empty() {
            debug!("Blank script, nothing to do");
            return RunOutcome::Skipped;
        }

        let started = self.state.send_if_modified(|state| {
            if state.running {
                return false;
            }
            state.running = true;
            state.last_error = None;
            state.storyboard.clear();
            state.progress_message = PARSING_MESSAGE.to_string();
            true
        });
        if !started {
            debug!("Run already in progress, ignoring request");
            return RunOutcome::Skipped;
        }

        let _guard = RunGuard { state: &self.state };

        match self.execute(script, aspect_ratio).await {
            Ok(items) => {
                info!(panels = items.len(), "Storyboard complete");
                RunOutcome::Completed(items)
            }
            Err(error) => {
                let message = error.message();
                let mut items = Vec::new();
                self.state.send_modify(|state| {
                    state.last_error = Some(message);
                    items = state.storyboard.clone();
                });
                RunOutcome::Aborted { items, error }
            }
        }
    }

    async fn execute(
        &self,
        script: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Vec<StoryboardItem>, PipelineError> {
        let scenes = self.parser.parse_script(script).await.map_err(|e| {
            error!(error = %e, "Scene parsing failed");
            PipelineError::new(PipelineErrorKind::ParseFailure)
        })?;

        if scenes.is_empty() {
            warn!("Parser returned no scenes");
            return Err(PipelineError::new(PipelineErrorKind::EmptyParseResult));
        }

        let total = scenes.len();
        info!(total, "Script parsed");

        let mut items = Vec::with_capacity(total);
        for (index, scene) in scenes.into_iter().enumerate() {
            let position = index + 1;
            self.state.send_modify(|state| {
                state.progress_message = format!(
                    "Generating image {} of {}: {}",
                    position, total, scene.description
                );
            });

            let prompt = self.styled_prompt(&scene.visual_prompt);
            let image = self
                .synthesizer
                .synthesize(&prompt, aspect_ratio)
                .await
                .map_err(|e| {
                    error!(scene = position, total, error = %e, "Image synthesis failed");
                    PipelineError::new(PipelineErrorKind::SynthesisFailure { scene: position })
                })?;

            debug!(scene = position, total, "Panel rendered");
            let item = StoryboardItem::new(scene.visual_prompt, image);
            self.state
                .send_modify(|state| state.storyboard.push(item.clone()));
            items.push(item);
        }

        Ok(items)
    }

    fn styled_prompt(&self, visual_prompt: &str) -> String {
        if self.style_suffix.is_empty() {
            visual_prompt.to_string()
        } else {
            format!("{}, {}", visual_prompt, self.style_suffix)
        }
    }
}

/// Returns the pipeline to idle however the run ends, including when the
/// run future is dropped mid-await.
struct RunGuard<'a> {
    state: &'a watch::Sender<RunState>,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| {
            state.running = false;
            state.progress_message.clear();
        });
    }
}
