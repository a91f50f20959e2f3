//! Conversions between storyboard types and Gemini wire types.

use super::GeminiResult;
use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, OutputOptions,
    PredictInstance, PredictParameters, PredictRequest, PredictResponse,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use storyboard_core::{AspectRatio, ImageData, Scene};
use storyboard_error::{GeminiError, GeminiErrorKind};

/// Build the segmentation request for a script.
pub(crate) fn scene_parse_request(script: &str) -> GenerateContentRequest {
    let prompt = format!(
        "Break the script below into its distinct scenes. For every scene return its \
         scene number, a one-sentence description of the action, and a detailed visual \
         prompt for an image generator written as comma-separated keywords and phrases \
         covering characters, setting, lighting, framing and mood.\n\n\
         Script:\n---\n{}\n---",
        script
    );

    GenerateContentRequest {
        contents: vec![Content::text(Some("user"), prompt)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(scene_schema()),
        }),
    }
}

fn scene_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "scene_number": {
                    "type": "INTEGER",
                    "description": "Sequential number of the scene, starting at 1."
                },
                "description": {
                    "type": "STRING",
                    "description": "Short description of what happens in the scene."
                },
                "visual_prompt": {
                    "type": "STRING",
                    "description": "Detailed image-generation prompt: characters, setting, lighting, camera angle, mood."
                }
            },
            "required": ["scene_number", "description", "visual_prompt"]
        }
    })
}

/// Concatenated text of the first candidate.
pub(crate) fn response_text(response: &GenerateContentResponse) -> GeminiResult<String> {
    let candidate = response.candidates.first().ok_or_else(|| {
        GeminiError::new(GeminiErrorKind::MalformedResponse(
            "response contained no candidates".to_string(),
        ))
    })?;

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| &content.parts)
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "candidate contained no text (finish reason: {})",
            reason
        ))));
    }

    Ok(text)
}

/// Strip markdown code fences the model sometimes wraps JSON in.
fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Parse the model's JSON reply into scenes.
///
/// A blank reply or JSON `null` yields no scenes. Entries missing a field,
/// or numbered below 1, are rejected.
pub(crate) fn parse_scenes(text: &str) -> GeminiResult<Vec<Scene>> {
    let json_text = strip_code_fences(text);
    if json_text.is_empty() {
        return Ok(Vec::new());
    }

    let scenes: Option<Vec<Scene>> = serde_json::from_str(json_text).map_err(|e| {
        GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "Failed to parse scenes JSON: {}",
            e
        )))
    })?;
    let scenes = scenes.unwrap_or_default();

    if let Some(bad) = scenes.iter().find(|scene| scene.scene_number == 0) {
        return Err(GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "scene numbers start at 1, got 0 for '{}'",
            bad.description
        ))));
    }

    Ok(scenes)
}

/// Build the Imagen request for one prompt.
pub(crate) fn image_request(
    prompt: &str,
    aspect_ratio: AspectRatio,
    mime_type: &str,
) -> PredictRequest {
    PredictRequest {
        instances: vec![PredictInstance {
            prompt: prompt.to_string(),
        }],
        parameters: PredictParameters {
            sample_count: 1,
            aspect_ratio: aspect_ratio.to_string(),
            output_options: OutputOptions {
                mime_type: mime_type.to_string(),
            },
        },
    }
}

/// Decode the first generated image; zero images is an error.
pub(crate) fn image_from_predict(
    response: PredictResponse,
    requested_mime_type: &str,
) -> GeminiResult<ImageData> {
    let prediction = response
        .predictions
        .into_iter()
        .find(|p| p.bytes_base64_encoded.is_some())
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageGenerated))?;

    let encoded = prediction.bytes_base64_encoded.unwrap_or_default();
    let bytes = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

    let mime_type = prediction
        .mime_type
        .unwrap_or_else(|| requested_mime_type.to_string());

    Ok(ImageData::new(mime_type, bytes))
}
