use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerateRecipesInput, ImagePayload},
    },
};

/// Sampling settings sent with every generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub response_schema: Option<serde_json::Value>,
}

/// LLM Client trait for calling AI models.
///
/// Both calls resolve to the text of the first part of the first candidate,
/// or `None` when the provider answered without any candidate.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// Stock photo search. Implementations report failures; degrading to the
/// fallback image is the service's job.
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchClient: Send + Sync {
    fn search(&self, query: String) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for recipe discovery business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn validate_food_content(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Never fails: any problem yields the fallback image.
    fn search_images(&self, query: String) -> impl Future<Output = Vec<String>> + Send;
}
