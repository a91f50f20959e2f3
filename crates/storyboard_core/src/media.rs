//! Generated image payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A rendered image returned by the image backend.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageData;
///
/// let image = ImageData::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.data_url(), "data:image/png;base64,iVBORw==");
/// assert_eq!(image.extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageData {
    /// MIME type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Raw encoded image bytes
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// Create an image from its MIME type and encoded bytes.
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Embeddable `data:` URL for this image.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// File extension matching the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}
