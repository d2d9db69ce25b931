use crate::domain::recipe::value_objects::RecipeInput;

pub const FOOD_VALIDATION_PROMPT: &str = "Does this image contain food ingredients? Respond with \"true\" if it does, and \"false\" if it does not. Do not include any other text.";

const RECIPE_FORMAT_INSTRUCTIONS: &str = " For each recipe, provide the recipe name, a list of ingredients, and a list of step-by-step instructions.
Ensure the output is a JSON array of recipe objects. The JSON must strictly adhere to the following schema:
[
  {
    \"recipeName\": \"Recipe 1 Name\",
    \"ingredients\": [\"Ingredient 1\", \"Ingredient 2\"],
    \"instructions\": [\"Step 1\", \"Step 2\"]
  },
  {
    \"recipeName\": \"Recipe 2 Name\",
    \"ingredients\": [\"Ingredient A\", \"Ingredient B\"],
    \"instructions\": [\"Step A\", \"Step B\"]
  }
]
";

/// Build the recipe generation prompt for either input variant
pub fn build_recipe_prompt(input: &RecipeInput, cuisine: Option<&str>) -> String {
    let mut prompt = match input {
        RecipeInput::Image(_) => "Analyze the ingredients visible in this image. Based on these ingredients, suggest 2-3 distinct recipes.".to_string(),
        RecipeInput::Text(text) => format!(
            "Suggest 2-3 distinct recipes using the following ingredients/keywords: \"{}\".",
            text.trim()
        ),
    };

    if let Some(cuisine) = cuisine.map(str::trim).filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(" Focus on {} cuisine.", cuisine));
    }

    prompt.push_str(RECIPE_FORMAT_INSTRUCTIONS);
    prompt
}

/// Keeps ASCII letters, digits and spaces only.
pub fn sanitize_search_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Interprets the validation answer; anything but `true` means no food.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("true")
}
