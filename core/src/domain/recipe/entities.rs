use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Recipe {
    pub fn new(name: String, ingredients: Vec<String>, instructions: Vec<String>) -> Self {
        Self {
            name,
            ingredients,
            instructions,
            image_urls: Vec::new(),
        }
    }

    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }
}
