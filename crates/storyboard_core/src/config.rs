//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - `~/.config/storyboard/storyboard.toml`
//! - `./storyboard.toml`

use crate::AspectRatio;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyboard_error::{ConfigError, ConfigErrorKind, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Gemini endpoint and model selection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// REST API root, without a trailing slash
    pub base_url: String,
    /// Model used for script segmentation
    pub text_model: String,
    /// Model used for panel rendering
    pub image_model: String,
    /// MIME type requested from the image model
    pub image_mime_type: String,
    /// Transport-level timeout per request; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            image_mime_type: "image/jpeg".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Storyboard pipeline settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Appended to every visual prompt before it is sent to the image model
    pub style_suffix: String,
    /// Aspect ratio used when the caller does not pick one
    #[serde(default)]
    pub default_aspect_ratio: AspectRatio,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            style_suffix: "cinematic, high detail, professional storyboard art".to_string(),
            default_aspect_ratio: AspectRatio::default(),
        }
    }
}

/// Conversation assistant settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Model backing the chat session
    pub model: String,
    /// Persona instruction fixed for the session
    pub system_instruction: String,
    /// Assistant turn the log opens with; empty for none
    #[serde(default)]
    pub greeting: String,
    /// Assistant turn appended when the backend fails
    pub fallback_reply: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            system_instruction: "You are a helpful assistant for a storyboard artist. You can \
                answer questions about scriptwriting, cinematography, and visual storytelling."
                .to_string(),
            greeting: "Hello! How can I help you with your storyboard today?".to_string(),
            fallback_reply: "Sorry, I encountered an error. Please try again.".to_string(),
        }
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_core::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Rendering with {}", config.gemini.image_model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct StoryboardConfig {
    /// Gemini backend settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Assistant settings
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl StoryboardConfig {
    /// Load bundled defaults overridden by a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::build(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryboardResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(ConfigErrorKind::Sources(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(ConfigErrorKind::InvalidValue(
                    e.to_string(),
                )))
            })
    }
}
