use std::{fmt, sync::LazyLock};

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

static DATA_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:(.*?);base64,").expect("valid data url regex"));

/// Raw image bytes with their MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string());

        Self { data, mime_type }
    }

    /// Parses `data:<mime>;base64,<data>`. A bare base64 string is accepted as JPEG.
    pub fn from_data_url(value: &str) -> Result<Self, CoreError> {
        let value = value.trim();
        let (mime_type, encoded) = match DATA_URL_PREFIX.captures(value) {
            Some(captures) => {
                let prefix_len = captures.get(0).map(|m| m.end()).unwrap_or(0);
                let mime = captures
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .filter(|m| !m.is_empty());
                (mime, &value[prefix_len..])
            }
            None => (None, value),
        };

        if encoded.is_empty() {
            return Err(CoreError::Validation(
                "Please upload an image of your ingredients.".to_string(),
            ));
        }

        let data = general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| CoreError::Validation("Failed to read image file.".to_string()))?;

        Ok(Self::new(data, mime_type))
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// What the recipes are generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeInput {
    Image(ImagePayload),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecipesInput {
    pub input: RecipeInput,
    pub cuisine: Option<String>,
}
