//! Gemini REST client.
//!
//! One [`GeminiClient`] serves scene parsing, image synthesis and chat; it
//! is cheap to clone (the HTTP connection pool is shared).

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument};

use storyboard_core::{AspectRatio, GeminiConfig, ImageData, Scene};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardResult};
use storyboard_interface::{AssistantBackend, ImageSynthesizer, SceneParser};

use super::GeminiResult;
use super::chat::GeminiChatSession;
use super::conversion;
use super::dto::{GenerateContentRequest, GenerateContentResponse, PredictResponse};

/// Client for the Google Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("text_model", &self.config.text_model)
            .field("image_model", &self.config.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client, reading the API key from `GEMINI_API_KEY` (or `API_KEY`).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storyboard_core::GeminiConfig;
    /// use storyboard_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new(GeminiConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new", skip(config))]
    pub fn new(config: GeminiConfig) -> StoryboardResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, config: GeminiConfig) -> StoryboardResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
        })
    }

    /// Backend settings this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:{}", self.config.base_url, model, method)
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> GeminiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        serde_json::from_str(&body).map_err(|e| {
            GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
                "Failed to decode response: {}",
                e
            )))
        })
    }

    /// Call `generateContent` on `model`.
    pub(crate) async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = self.model_url(model, "generateContent");
        self.post_json(&url, request).await
    }

    async fn parse_script_internal(&self, script: &str) -> GeminiResult<Vec<Scene>> {
        let request = conversion::scene_parse_request(script);
        let response = self
            .generate_content(&self.config.text_model, &request)
            .await?;
        let text = conversion::response_text(&response)?;
        conversion::parse_scenes(&text)
    }

    async fn synthesize_internal(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> GeminiResult<ImageData> {
        let request =
            conversion::image_request(prompt, aspect_ratio, &self.config.image_mime_type);
        let url = self.model_url(&self.config.image_model, "predict");
        let response: PredictResponse = self.post_json(&url, &request).await?;
        conversion::image_from_predict(response, &self.config.image_mime_type)
    }
}

#[async_trait]
impl SceneParser for GeminiClient {
    #[instrument(skip(self, script), fields(model = %self.config.text_model, script_len = script.len()))]
    async fn parse_script(&self, script: &str) -> StoryboardResult<Vec<Scene>> {
        let scenes = self.parse_script_internal(script).await?;
        debug!(scenes = scenes.len(), "Parsed script");
        Ok(scenes)
    }
}

#[async_trait]
impl ImageSynthesizer for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model, aspect_ratio = %aspect_ratio))]
    async fn synthesize(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> StoryboardResult<ImageData> {
        let image = self.synthesize_internal(prompt, aspect_ratio).await?;
        debug!(bytes = image.bytes.len(), mime = %image.mime_type, "Image generated");
        Ok(image)
    }
}

#[async_trait]
impl AssistantBackend for GeminiClient {
    type Session = GeminiChatSession;

    #[instrument(skip(self, system_instruction))]
    async fn start_session(
        &self,
        system_instruction: &str,
        model: &str,
    ) -> StoryboardResult<GeminiChatSession> {
        Ok(GeminiChatSession::new(
            self.clone(),
            model.to_string(),
            system_instruction.to_string(),
        ))
    }
}
