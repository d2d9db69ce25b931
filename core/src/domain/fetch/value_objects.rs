use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::value_objects::ImagePayload;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Image,
    Text,
}

/// The image field of the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSlot {
    #[default]
    Empty,
    Reading,
    Ready(ImagePayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    Image(ImageSlot),
    Text(String),
}

impl SearchInput {
    pub fn mode(&self) -> InputMode {
        match self {
            SearchInput::Image(_) => InputMode::Image,
            SearchInput::Text(_) => InputMode::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub input: SearchInput,
    pub cuisine: Option<String>,
}

impl FetchRequest {
    pub fn text(text: impl Into<String>, cuisine: Option<String>) -> Self {
        Self {
            input: SearchInput::Text(text.into()),
            cuisine,
        }
    }

    pub fn image(image: ImagePayload, cuisine: Option<String>) -> Self {
        Self {
            input: SearchInput::Image(ImageSlot::Ready(image)),
            cuisine,
        }
    }
}
