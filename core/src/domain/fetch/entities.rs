use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    fetch::value_objects::InputMode,
    recipe::{entities::Recipe, value_objects::ImagePayload},
};

/// Monotonic session number; writes tagged with an older one are dropped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub struct SessionGeneration(pub u64);

impl SessionGeneration {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    #[default]
    Idle,
    ValidatingInput,
    GeneratingRecipes,
    EnrichingImages,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub loading_image: bool,
}

impl SessionRecipe {
    pub fn pending(recipe: Recipe) -> Self {
        Self {
            recipe: Recipe {
                image_urls: Vec::new(),
                ..recipe
            },
            loading_image: true,
        }
    }

    pub fn loaded(recipe: Recipe) -> Self {
        Self {
            recipe,
            loading_image: false,
        }
    }
}

/// State of one submit-to-settle cycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FetchSession {
    pub generation: SessionGeneration,
    pub phase: FetchPhase,
    pub input_mode: InputMode,
    pub cuisine: Option<String>,
    pub recipes_loading: bool,
    pub images_loading: bool,
    pub error: Option<String>,
    pub recipes: Vec<SessionRecipe>,
    pub started_at: Option<DateTime<Utc>>,
    pub settled_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub input_image: Option<ImagePayload>,
}

impl Default for FetchSession {
    fn default() -> Self {
        Self {
            generation: SessionGeneration::default(),
            phase: FetchPhase::Idle,
            input_mode: InputMode::Image,
            cuisine: None,
            recipes_loading: false,
            images_loading: false,
            error: None,
            recipes: Vec::new(),
            started_at: None,
            settled_at: None,
            input_image: None,
        }
    }
}

impl FetchSession {
    /// Drops everything from the previous session and starts a new generation.
    pub fn reset(&mut self, input_mode: InputMode) -> SessionGeneration {
        let generation = self.generation.next();
        *self = Self {
            generation,
            input_mode,
            ..Self::default()
        };
        generation
    }

    pub fn is_current(&self, generation: SessionGeneration) -> bool {
        self.generation == generation
    }

    pub fn begin(
        &mut self,
        input_mode: InputMode,
        cuisine: Option<String>,
        input_image: Option<ImagePayload>,
    ) -> SessionGeneration {
        let generation = self.reset(input_mode);
        self.cuisine = cuisine;
        self.input_image = input_image;
        self.recipes_loading = true;
        self.started_at = Some(Utc::now());
        generation
    }

    pub fn enter(&mut self, generation: SessionGeneration, phase: FetchPhase) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = phase;
        true
    }

    pub fn settle_with_error(&mut self, generation: SessionGeneration, message: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.recipes.clear();
        self.error = Some(message);
        self.settle();
        true
    }

    pub fn start_enrichment(&mut self, generation: SessionGeneration, recipes: Vec<Recipe>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.recipes = recipes.into_iter().map(SessionRecipe::pending).collect();
        self.recipes_loading = false;
        self.images_loading = true;
        self.phase = FetchPhase::EnrichingImages;
        true
    }

    /// Writes one recipe's images. No-op for a superseded generation.
    pub fn apply_image_urls(
        &mut self,
        generation: SessionGeneration,
        index: usize,
        image_urls: Vec<String>,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        match self.recipes.get_mut(index) {
            Some(entry) => {
                entry.recipe.image_urls = image_urls;
                entry.loading_image = false;
                true
            }
            None => false,
        }
    }

    pub fn finish_enrichment(&mut self, generation: SessionGeneration) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.settle();
        true
    }

    /// Reinstates a previously fetched list. Recipes saved before their
    /// images arrived come back as loading and the session stays in
    /// `EnrichingImages` until they are looked up again.
    pub fn restore(&mut self, recipes: Vec<Recipe>, input_image: Option<ImagePayload>) -> SessionGeneration {
        let input_mode = self.input_mode;
        let generation = self.reset(input_mode);
        self.recipes = recipes
            .into_iter()
            .map(|recipe| {
                if recipe.image_urls.is_empty() {
                    SessionRecipe::pending(recipe)
                } else {
                    SessionRecipe::loaded(recipe)
                }
            })
            .collect();
        self.input_image = input_image;
        self.started_at = Some(Utc::now());

        if self.recipes.iter().any(|r| r.loading_image) {
            self.images_loading = true;
            self.phase = FetchPhase::EnrichingImages;
        } else {
            self.settle();
        }
        generation
    }

    /// True when `recipes` is the list this session is showing, images aside.
    pub fn holds(&self, recipes: &[Recipe]) -> bool {
        self.error.is_none()
            && self.recipes.len() == recipes.len()
            && self.recipes.iter().zip(recipes).all(|(current, saved)| {
                current.recipe.name == saved.name
                    && current.recipe.ingredients == saved.ingredients
                    && current.recipe.instructions == saved.instructions
            })
    }

    /// Index and search query of every recipe still waiting for images.
    pub fn pending_lookups(&self) -> Vec<(usize, String)> {
        self.recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.loading_image)
            .map(|(index, r)| (index, r.recipe.name.clone()))
            .collect()
    }

    pub fn recipe_list(&self) -> Vec<Recipe> {
        self.recipes.iter().map(|r| r.recipe.clone()).collect()
    }

    fn settle(&mut self) {
        self.phase = FetchPhase::Settled;
        self.recipes_loading = false;
        self.images_loading = false;
        self.settled_at = Some(Utc::now());
    }
}
