use serde::Deserialize;
use serde_json::json;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipe_list_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "recipeName": { "type": "STRING" },
                "ingredients": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "instructions": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "propertyOrdering": ["recipeName", "ingredients", "instructions"]
        }
    })
}

#[derive(Debug, Deserialize)]
struct RecipePayload {
    #[serde(rename = "recipeName", alias = "name")]
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

/// Parses the generated text against the recipe list contract.
pub fn parse_recipe_list(raw: &str) -> Result<Vec<Recipe>, CoreError> {
    let parsed: serde_json::Value = serde_json::from_str(raw.trim())
        .map_err(|e| CoreError::malformed(format!("response is not valid JSON: {}", e)))?;

    let elements = parsed
        .as_array()
        .ok_or_else(|| CoreError::malformed("response is not a JSON array"))?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let object = element.as_object().ok_or_else(|| {
                CoreError::malformed(format!("recipe #{} is not an object", index))
            })?;

            if !object.contains_key("recipeName") && !object.contains_key("name") {
                return Err(CoreError::malformed(format!(
                    "recipe #{} has no name",
                    index
                )));
            }

            let payload: RecipePayload = serde_json::from_value(element.clone()).map_err(|e| {
                CoreError::malformed(format!("recipe #{} has an invalid shape: {}", index, e))
            })?;

            let name = payload.name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::malformed(format!(
                    "recipe #{} has an empty name",
                    index
                )));
            }

            Ok(Recipe::new(name, payload.ingredients, payload.instructions))
        })
        .collect()
}
