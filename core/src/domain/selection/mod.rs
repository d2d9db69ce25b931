use crate::domain::recipe::{entities::Recipe, value_objects::ImagePayload};

/// What the search view gets back after returning from the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnState {
    pub recipes: Vec<Recipe>,
    pub input_image: Option<ImagePayload>,
}

/// Selection state shared between the search and detail views for the
/// lifetime of the application session.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    selected_recipe: Option<Recipe>,
    recipe_list: Vec<Recipe>,
    input_image: Option<ImagePayload>,
    returning: bool,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites all four fields for a navigation to the detail view.
    pub fn select(
        &mut self,
        recipe: Recipe,
        recipe_list: Vec<Recipe>,
        input_image: Option<ImagePayload>,
    ) {
        self.selected_recipe = Some(recipe);
        self.recipe_list = recipe_list;
        self.input_image = input_image;
        self.returning = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn mark_returning(&mut self) {
        self.returning = true;
    }

    /// Read-then-reset: yields the saved list at most once per `mark_returning`.
    pub fn consume_returning(&mut self) -> Option<ReturnState> {
        if !std::mem::take(&mut self.returning) {
            return None;
        }

        Some(ReturnState {
            recipes: self.recipe_list.clone(),
            input_image: self.input_image.clone(),
        })
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    pub fn recipe_list(&self) -> &[Recipe] {
        &self.recipe_list
    }

    pub fn input_image(&self) -> Option<&ImagePayload> {
        self.input_image.as_ref()
    }

    pub fn is_returning(&self) -> bool {
        self.returning
    }
}
