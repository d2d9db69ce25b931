use crate::domain::{
    common::{FALLBACK_IMAGE, entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        helpers::{FOOD_VALIDATION_PROMPT, build_recipe_prompt, is_affirmative, sanitize_search_query},
        ports::{GenerationOptions, ImageSearchClient, LLMClient, RecipeService},
        schema::{get_recipe_list_schema, parse_recipe_list},
        value_objects::{GenerateRecipesInput, ImagePayload, RecipeInput},
    },
};

const MAX_IMAGES_PER_RECIPE: usize = 3;

fn validation_options() -> GenerationOptions {
    GenerationOptions {
        temperature: 0.1,
        max_output_tokens: 10,
        response_schema: None,
    }
}

fn generation_options() -> GenerationOptions {
    GenerationOptions {
        temperature: 0.7,
        max_output_tokens: 2000,
        response_schema: Some(get_recipe_list_schema()),
    }
}

impl<LLM, IS> RecipeService for Service<LLM, IS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
{
    async fn validate_food_content(&self, image: ImagePayload) -> Result<bool, CoreError> {
        let answer = self
            .llm_client
            .generate_with_image(FOOD_VALIDATION_PROMPT.to_string(), image, validation_options())
            .await?;

        Ok(answer.as_deref().is_some_and(is_affirmative))
    }

    async fn generate_recipes(&self, input: GenerateRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        let prompt = build_recipe_prompt(&input.input, input.cuisine.as_deref());

        let raw_response = match input.input {
            RecipeInput::Image(image) => {
                self.llm_client
                    .generate_with_image(prompt, image, generation_options())
                    .await?
            }
            RecipeInput::Text(_) => {
                self.llm_client
                    .generate_with_text(prompt, generation_options())
                    .await?
            }
        };

        let raw_response = raw_response
            .ok_or_else(|| CoreError::malformed("no candidate in generation response"))?;

        parse_recipe_list(&raw_response)
    }

    async fn search_images(&self, query: String) -> Vec<String> {
        let sanitized = sanitize_search_query(&query);

        match self.image_search.search(sanitized).await {
            Ok(urls) if !urls.is_empty() => urls.into_iter().take(MAX_IMAGES_PER_RECIPE).collect(),
            Ok(_) => {
                tracing::warn!("No image found for \"{}\", using fallback", query);
                vec![FALLBACK_IMAGE.to_string()]
            }
            Err(e) => {
                tracing::warn!("Image search failed for \"{}\": {}", query, e);
                vec![FALLBACK_IMAGE.to_string()]
            }
        }
    }
}
