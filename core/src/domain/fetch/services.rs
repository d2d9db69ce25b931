use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    fetch::{
        entities::{FetchPhase, FetchSession, SessionGeneration},
        value_objects::{FetchRequest, ImageSlot, InputMode, SearchInput},
    },
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        value_objects::{GenerateRecipesInput, RecipeInput},
    },
    selection::SelectionContext,
};

/// Drives a submission through validation, generation and image enrichment,
/// publishing every step into the shared [`FetchSession`].
pub struct RecipeFetcher<S>
where
    S: RecipeService,
{
    service: Arc<S>,
    session: Arc<RwLock<FetchSession>>,
}

impl<S> Clone for RecipeFetcher<S>
where
    S: RecipeService,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            session: Arc::clone(&self.session),
        }
    }
}

/// Result of [`RecipeFetcher::submit`] once recipes are known or the session failed.
pub struct Submission<S>
where
    S: RecipeService,
{
    pub session: FetchSession,
    pub error: Option<CoreError>,
    pub enrichment: Option<ImageEnrichment<S>>,
}

/// Pending image lookups for one session generation.
pub struct ImageEnrichment<S>
where
    S: RecipeService,
{
    service: Arc<S>,
    session: Arc<RwLock<FetchSession>>,
    generation: SessionGeneration,
    lookups: Vec<(usize, String)>,
}

fn prepare_input(input: SearchInput) -> Result<RecipeInput, CoreError> {
    match input {
        SearchInput::Image(ImageSlot::Ready(image)) if !image.is_empty() => {
            Ok(RecipeInput::Image(image))
        }
        SearchInput::Image(ImageSlot::Reading) => Err(CoreError::Validation(
            "Please wait, image is still being processed.".to_string(),
        )),
        SearchInput::Image(_) => Err(CoreError::Validation(
            "Please upload an image of your ingredients.".to_string(),
        )),
        SearchInput::Text(text) if !text.trim().is_empty() => {
            Ok(RecipeInput::Text(text.trim().to_string()))
        }
        SearchInput::Text(_) => Err(CoreError::Validation(
            "Please enter some ingredients.".to_string(),
        )),
    }
}

impl<S> RecipeFetcher<S>
where
    S: RecipeService,
{
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            session: Arc::new(RwLock::new(FetchSession::default())),
        }
    }

    pub async fn snapshot(&self) -> FetchSession {
        self.session.read().await.clone()
    }

    /// Runs the submission up to the point where recipes are known. Image
    /// enrichment is handed back so the caller can await or spawn it.
    pub async fn submit(&self, request: FetchRequest) -> Submission<S> {
        let mode = request.input.mode();
        let cuisine = request
            .cuisine
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let input_image = match &request.input {
            SearchInput::Image(ImageSlot::Ready(image)) => Some(image.clone()),
            _ => None,
        };

        let generation = self
            .session
            .write()
            .await
            .begin(mode, cuisine.clone(), input_image);

        let input = match prepare_input(request.input) {
            Ok(input) => input,
            Err(e) => return self.fail(generation, e).await,
        };

        if let RecipeInput::Image(image) = &input {
            if !self.enter(generation, FetchPhase::ValidatingInput).await {
                return self.superseded(generation).await;
            }

            match self.service.validate_food_content(image.clone()).await {
                Ok(true) => {}
                Ok(false) => return self.fail(generation, CoreError::ContentMismatch).await,
                Err(e) => return self.fail(generation, e).await,
            }
        }

        if !self.enter(generation, FetchPhase::GeneratingRecipes).await {
            return self.superseded(generation).await;
        }

        let recipes = match self
            .service
            .generate_recipes(GenerateRecipesInput { input, cuisine })
            .await
        {
            Ok(recipes) if recipes.is_empty() => {
                return self.fail(generation, CoreError::NoRecipesFound).await;
            }
            Ok(recipes) => recipes,
            Err(e) => return self.fail(generation, e).await,
        };

        let lookups = recipes
            .iter()
            .enumerate()
            .map(|(index, r)| (index, r.name.clone()))
            .collect::<Vec<_>>();

        let mut session = self.session.write().await;
        if !session.start_enrichment(generation, recipes) {
            drop(session);
            return self.superseded(generation).await;
        }

        info!(
            generation = generation.0,
            count = lookups.len(),
            "Recipes generated, enriching images"
        );

        Submission {
            session: session.clone(),
            error: None,
            enrichment: Some(self.enrichment(generation, lookups)),
        }
    }

    /// Submits and waits for every image lookup to settle.
    pub async fn fetch(&self, request: FetchRequest) -> FetchSession {
        let submission = self.submit(request).await;
        match submission.enrichment {
            Some(enrichment) => {
                enrichment.run().await;
                self.snapshot().await
            }
            None => submission.session,
        }
    }

    /// Copies the recipe, the current list and the input image into the context.
    pub async fn select_recipe(
        &self,
        index: usize,
        ctx: &mut SelectionContext,
    ) -> Result<Recipe, CoreError> {
        let session = self.session.read().await;
        let recipe = session
            .recipes
            .get(index)
            .map(|entry| entry.recipe.clone())
            .ok_or(CoreError::NotFound)?;

        ctx.select(
            recipe.clone(),
            session.recipe_list(),
            session.input_image.clone(),
        );

        Ok(recipe)
    }

    pub async fn clear_image(&self, ctx: &mut SelectionContext) -> FetchSession {
        let mut session = self.session.write().await;
        let mode = session.input_mode;
        session.reset(mode);
        ctx.clear();
        session.clone()
    }

    pub async fn switch_input_mode(
        &self,
        mode: InputMode,
        ctx: &mut SelectionContext,
    ) -> FetchSession {
        let mut session = self.session.write().await;
        session.reset(mode);
        ctx.clear();
        session.clone()
    }

    /// Reinstates the last list when coming back from the detail view.
    ///
    /// When the saved list is still the live session it is left alone, so
    /// lookups that were running during the navigation keep landing.
    /// Otherwise the list is reinstated and recipes saved before their
    /// images arrived are handed back as a new enrichment.
    pub async fn restore(&self, ctx: &mut SelectionContext) -> Option<Submission<S>> {
        let state = ctx.consume_returning()?;
        let mut session = self.session.write().await;

        if session.holds(&state.recipes) {
            debug!(
                generation = session.generation.0,
                "Returning to the live session"
            );
            return Some(Submission {
                session: session.clone(),
                error: None,
                enrichment: None,
            });
        }

        let generation = session.restore(state.recipes, state.input_image);
        let lookups = session.pending_lookups();
        let enrichment = (!lookups.is_empty()).then(|| {
            info!(
                generation = generation.0,
                count = lookups.len(),
                "Restored list is missing images, enriching again"
            );
            self.enrichment(generation, lookups)
        });

        Some(Submission {
            session: session.clone(),
            error: None,
            enrichment,
        })
    }

    fn enrichment(
        &self,
        generation: SessionGeneration,
        lookups: Vec<(usize, String)>,
    ) -> ImageEnrichment<S> {
        ImageEnrichment {
            service: Arc::clone(&self.service),
            session: Arc::clone(&self.session),
            generation,
            lookups,
        }
    }

    async fn enter(&self, generation: SessionGeneration, phase: FetchPhase) -> bool {
        let entered = self.session.write().await.enter(generation, phase);
        if entered {
            debug!(generation = generation.0, ?phase, "Fetch phase changed");
        }
        entered
    }

    async fn fail(&self, generation: SessionGeneration, error: CoreError) -> Submission<S> {
        warn!(generation = generation.0, "Fetch session failed: {}", error);

        let mut session = self.session.write().await;
        session.settle_with_error(generation, error.to_string());

        Submission {
            session: session.clone(),
            error: Some(error),
            enrichment: None,
        }
    }

    async fn superseded(&self, generation: SessionGeneration) -> Submission<S> {
        debug!(generation = generation.0, "Fetch session superseded");

        Submission {
            session: self.snapshot().await,
            error: None,
            enrichment: None,
        }
    }
}

impl<S> ImageEnrichment<S>
where
    S: RecipeService,
{
    pub fn generation(&self) -> SessionGeneration {
        self.generation
    }

    /// Looks up images for each pending recipe concurrently. Each result is
    /// written as soon as it arrives. Returns false when the session moved
    /// on before the lookups finished.
    pub async fn run(self) -> bool {
        let Self {
            service,
            session,
            generation,
            lookups,
        } = self;

        let mut lookups = lookups
            .into_iter()
            .map(|(index, query)| {
                let service = &service;
                async move { (index, service.search_images(query).await) }
            })
            .collect::<FuturesUnordered<_>>();

        while let Some((index, image_urls)) = lookups.next().await {
            let applied = session
                .write()
                .await
                .apply_image_urls(generation, index, image_urls);

            if !applied {
                debug!(
                    generation = generation.0,
                    index, "Discarding image result for a superseded session"
                );
            }
        }

        let finished = session.write().await.finish_enrichment(generation);
        if finished {
            info!(generation = generation.0, "All image lookups attempted");
        }
        finished
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashMap, VecDeque},
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use tokio::sync::Semaphore;

    use super::*;
    use crate::domain::{
        common::{FALLBACK_IMAGE, services::Service},
        recipe::{
            ports::{MockImageSearchClient, MockLLMClient, MockRecipeService},
            value_objects::ImagePayload,
        },
    };

    fn recipe(name: &str) -> Recipe {
        Recipe::new(
            name.to_string(),
            vec!["ingredient".to_string()],
            vec!["step".to_string()],
        )
    }

    fn image() -> ImagePayload {
        ImagePayload::new(vec![0xFF, 0xD8, 0xFF], Some("image/png".to_string()))
    }

    /// Scripted service; searches whose query starts with `held_prefix`
    /// block until a permit is added to `gate`.
    struct FakeRecipeService {
        validation: Result<bool, CoreError>,
        generations: Mutex<VecDeque<Result<Vec<Recipe>, CoreError>>>,
        images: HashMap<String, Vec<String>>,
        held_prefix: Option<String>,
        gate: Arc<Semaphore>,
        validate_calls: AtomicUsize,
        generate_calls: AtomicUsize,
    }

    impl FakeRecipeService {
        fn new(generations: Vec<Result<Vec<Recipe>, CoreError>>) -> Self {
            Self {
                validation: Ok(true),
                generations: Mutex::new(generations.into()),
                images: HashMap::new(),
                held_prefix: None,
                gate: Arc::new(Semaphore::new(0)),
                validate_calls: AtomicUsize::new(0),
                generate_calls: AtomicUsize::new(0),
            }
        }

        fn with_images(mut self, name: &str, urls: &[&str]) -> Self {
            self.images.insert(
                name.to_string(),
                urls.iter().map(|u| u.to_string()).collect(),
            );
            self
        }

        fn holding(mut self, prefix: &str) -> Self {
            self.held_prefix = Some(prefix.to_string());
            self
        }
    }

    impl RecipeService for FakeRecipeService {
        async fn validate_food_content(&self, _image: ImagePayload) -> Result<bool, CoreError> {
            self.validate_calls.fetch_add(1, Ordering::SeqCst);
            self.validation.clone()
        }

        async fn generate_recipes(
            &self,
            _input: GenerateRecipesInput,
        ) -> Result<Vec<Recipe>, CoreError> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            self.generations
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn search_images(&self, query: String) -> Vec<String> {
            if let Some(prefix) = &self.held_prefix
                && query.starts_with(prefix.as_str())
            {
                let _permit = self.gate.acquire().await.unwrap();
            }

            self.images
                .get(&query)
                .cloned()
                .unwrap_or_else(|| vec![FALLBACK_IMAGE.to_string()])
        }
    }

    async fn wait_until<S, F>(fetcher: &RecipeFetcher<S>, predicate: F) -> FetchSession
    where
        S: RecipeService,
        F: Fn(&FetchSession) -> bool,
    {
        for _ in 0..100 {
            let snapshot = fetcher.snapshot().await;
            if predicate(&snapshot) {
                return snapshot;
            }
            tokio::task::yield_now().await;
        }
        panic!("session never reached the expected state");
    }

    #[tokio::test]
    async fn non_food_image_settles_without_generation() {
        let service = Arc::new(FakeRecipeService {
            validation: Ok(false),
            ..FakeRecipeService::new(vec![Ok(vec![recipe("Dal")])])
        });
        let fetcher = RecipeFetcher::new(Arc::clone(&service));

        let submission = fetcher.submit(FetchRequest::image(image(), None)).await;

        assert!(submission.enrichment.is_none());
        assert_eq!(submission.error, Some(CoreError::ContentMismatch));
        assert_eq!(submission.session.phase, FetchPhase::Settled);
        assert!(submission.session.recipes.is_empty());
        assert_eq!(
            submission.session.error.as_deref(),
            Some(CoreError::ContentMismatch.to_string().as_str())
        );
        assert_eq!(service.validate_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validation_failure_is_surfaced_as_session_error() {
        let service = Arc::new(FakeRecipeService {
            validation: Err(CoreError::Upstream("API key not valid".to_string())),
            ..FakeRecipeService::new(vec![])
        });
        let fetcher = RecipeFetcher::new(Arc::clone(&service));

        let session = fetcher.fetch(FetchRequest::image(image(), None)).await;

        assert_eq!(
            session.error.as_deref(),
            Some("API request failed: API key not valid")
        );
        assert_eq!(service.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn text_submission_lists_recipes_then_enriches_them() {
        let service = Arc::new(
            FakeRecipeService::new(vec![Ok(vec![
                recipe("Chicken Biryani"),
                recipe("Chicken Pulao"),
            ])])
            .with_images("Chicken Biryani", &["https://img/b1.jpg", "https://img/b2.jpg"]),
        );
        let fetcher = RecipeFetcher::new(service);

        let submission = fetcher
            .submit(FetchRequest::text("chicken, rice", Some("Indian".to_string())))
            .await;

        let names = submission
            .session
            .recipes
            .iter()
            .map(|r| r.recipe.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Chicken Biryani", "Chicken Pulao"]);
        assert!(submission.session.recipes.iter().all(|r| r.loading_image));
        assert!(submission.session.images_loading);
        assert_eq!(submission.session.phase, FetchPhase::EnrichingImages);
        assert_eq!(submission.session.cuisine.as_deref(), Some("Indian"));

        assert!(submission.enrichment.unwrap().run().await);

        let session = fetcher.snapshot().await;
        assert_eq!(session.phase, FetchPhase::Settled);
        assert!(!session.images_loading);
        assert!(
            session
                .recipes
                .iter()
                .all(|r| !r.loading_image && !r.recipe.image_urls.is_empty())
        );
        assert_eq!(session.recipes[0].recipe.image_urls.len(), 2);
        assert_eq!(session.recipes[1].recipe.image_urls, vec![FALLBACK_IMAGE]);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_without_network_calls() {
        let fetcher = RecipeFetcher::new(Arc::new(MockRecipeService::new()));

        let blank = fetcher.submit(FetchRequest::text("   ", None)).await;
        assert_eq!(
            blank.error,
            Some(CoreError::Validation(
                "Please enter some ingredients.".to_string()
            ))
        );
        assert_eq!(blank.session.phase, FetchPhase::Settled);

        let reading = fetcher
            .submit(FetchRequest {
                input: SearchInput::Image(ImageSlot::Reading),
                cuisine: None,
            })
            .await;
        assert_eq!(
            reading.session.error.as_deref(),
            Some("Please wait, image is still being processed.")
        );

        let empty = fetcher
            .submit(FetchRequest {
                input: SearchInput::Image(ImageSlot::Empty),
                cuisine: None,
            })
            .await;
        assert_eq!(
            empty.session.error.as_deref(),
            Some("Please upload an image of your ingredients.")
        );
    }

    #[tokio::test]
    async fn empty_generation_reports_no_recipes() {
        let fetcher = RecipeFetcher::new(Arc::new(FakeRecipeService::new(vec![Ok(vec![])])));

        let submission = fetcher.submit(FetchRequest::text("water", None)).await;

        assert!(submission.enrichment.is_none());
        assert_eq!(submission.error, Some(CoreError::NoRecipesFound));
        assert!(submission.session.recipes.is_empty());
        assert!(!submission.session.recipes_loading);
    }

    #[tokio::test]
    async fn malformed_generation_settles_with_empty_list() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(Some("{not json".to_string())) }));
        let mut search = MockImageSearchClient::new();
        search.expect_search().never();

        let fetcher = RecipeFetcher::new(Arc::new(Service::new(llm, search)));
        let session = fetcher.fetch(FetchRequest::text("eggs", None)).await;

        assert_eq!(session.phase, FetchPhase::Settled);
        assert!(session.recipes.is_empty());
        assert_eq!(
            session.error,
            Some(CoreError::MalformedResponse(String::new()).to_string())
        );
    }

    #[tokio::test]
    async fn failed_image_search_only_affects_its_recipe() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Ok(Some(
                    r#"[{"recipeName":"Biryani","ingredients":["rice"],"instructions":["Cook"]},
                        {"recipeName":"Pulao","ingredients":["rice"],"instructions":["Boil"]}]"#
                        .to_string(),
                ))
            })
        });
        let mut search = MockImageSearchClient::new();
        search.expect_search().times(2).returning(|query| {
            Box::pin(async move {
                if query == "Pulao" {
                    Err(CoreError::Upstream("connection reset".to_string()))
                } else {
                    Ok(vec![
                        "https://img/biryani-1.jpg".to_string(),
                        "https://img/biryani-2.jpg".to_string(),
                    ])
                }
            })
        });

        let fetcher = RecipeFetcher::new(Arc::new(Service::new(llm, search)));
        let session = fetcher.fetch(FetchRequest::text("rice", None)).await;

        assert_eq!(
            session.recipes[0].recipe.image_urls,
            vec!["https://img/biryani-1.jpg", "https://img/biryani-2.jpg"]
        );
        assert_eq!(session.recipes[1].recipe.image_urls, vec![FALLBACK_IMAGE]);
        assert!(session.recipes.iter().all(|r| !r.loading_image));
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn image_results_are_visible_before_the_slowest_lookup() {
        let service = Arc::new(
            FakeRecipeService::new(vec![Ok(vec![recipe("Quick Salad"), recipe("Slow Roast")])])
                .with_images("Quick Salad", &["https://img/salad.jpg"])
                .holding("Slow"),
        );
        let fetcher = RecipeFetcher::new(Arc::clone(&service));

        let submission = fetcher.submit(FetchRequest::text("greens", None)).await;
        let running = tokio::spawn(submission.enrichment.unwrap().run());

        let partial = wait_until(&fetcher, |s| !s.recipes[0].loading_image).await;
        assert_eq!(partial.recipes[0].recipe.image_urls, vec!["https://img/salad.jpg"]);
        assert!(partial.recipes[1].loading_image);
        assert!(partial.images_loading);

        service.gate.add_permits(1);
        assert!(running.await.unwrap());
        assert!(!fetcher.snapshot().await.images_loading);
    }

    #[tokio::test]
    async fn late_results_from_a_replaced_session_are_discarded() {
        let service = Arc::new(
            FakeRecipeService::new(vec![
                Ok(vec![recipe("Old Dal")]),
                Ok(vec![recipe("New Soup"), recipe("New Stew")]),
            ])
            .with_images("Old Dal", &["https://img/old.jpg"])
            .with_images("New Soup", &["https://img/soup.jpg"])
            .holding("Old"),
        );
        let fetcher = RecipeFetcher::new(Arc::clone(&service));

        let first = fetcher.submit(FetchRequest::text("lentils", None)).await;
        let stale = tokio::spawn(first.enrichment.unwrap().run());
        tokio::task::yield_now().await;

        let second = fetcher.fetch(FetchRequest::text("vegetables", None)).await;
        assert!(second.generation > first.session.generation);

        service.gate.add_permits(1);
        assert!(!stale.await.unwrap());

        let session = fetcher.snapshot().await;
        assert_eq!(session.generation, second.generation);
        assert_eq!(session.phase, FetchPhase::Settled);
        let names = session
            .recipes
            .iter()
            .map(|r| r.recipe.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["New Soup", "New Stew"]);
        assert_eq!(session.recipes[0].recipe.image_urls, vec!["https://img/soup.jpg"]);
        assert!(
            session
                .recipes
                .iter()
                .all(|r| !r.recipe.image_urls.contains(&"https://img/old.jpg".to_string()))
        );
    }

    #[tokio::test]
    async fn selection_round_trip_restores_the_list() {
        let service = Arc::new(FakeRecipeService::new(vec![Ok(vec![
            recipe("Dal"),
            recipe("Rice"),
        ])]));
        let fetcher = RecipeFetcher::new(service);
        let mut ctx = SelectionContext::new();

        fetcher.fetch(FetchRequest::image(image(), None)).await;

        let selected = fetcher.select_recipe(1, &mut ctx).await.unwrap();
        assert_eq!(selected.name, "Rice");
        assert_eq!(ctx.recipe_list().len(), 2);
        assert_eq!(ctx.input_image(), Some(&image()));
        assert!(fetcher.select_recipe(7, &mut ctx).await.is_err());

        assert!(fetcher.restore(&mut ctx).await.is_none());

        fetcher.clear_image(&mut SelectionContext::new()).await;
        ctx.mark_returning();
        let restored = fetcher.restore(&mut ctx).await.expect("restored session");
        assert!(restored.enrichment.is_none());
        assert_eq!(restored.session.recipes.len(), 2);
        assert_eq!(restored.session.phase, FetchPhase::Settled);
        assert!(restored.session.settled_at.is_some());
        assert_eq!(restored.session.input_image, Some(image()));
        assert!(fetcher.restore(&mut ctx).await.is_none());
    }

    #[tokio::test]
    async fn returning_mid_enrichment_keeps_the_live_lookups() {
        let service = Arc::new(
            FakeRecipeService::new(vec![Ok(vec![recipe("Slow Dal"), recipe("Slow Rice")])])
                .with_images("Slow Dal", &["https://img/dal.jpg"])
                .holding("Slow"),
        );
        let fetcher = RecipeFetcher::new(Arc::clone(&service));
        let mut ctx = SelectionContext::new();

        let submission = fetcher.submit(FetchRequest::text("lentils, rice", None)).await;
        let generation = submission.session.generation;
        let running = tokio::spawn(submission.enrichment.unwrap().run());

        fetcher.select_recipe(0, &mut ctx).await.unwrap();
        assert!(ctx.recipe_list().iter().all(|r| r.image_urls.is_empty()));
        ctx.mark_returning();

        let restored = fetcher.restore(&mut ctx).await.expect("restored session");
        assert!(restored.enrichment.is_none());
        assert_eq!(restored.session.generation, generation);
        assert!(restored.session.images_loading);

        service.gate.add_permits(2);
        assert!(running.await.unwrap());

        let session = fetcher.snapshot().await;
        assert_eq!(session.generation, generation);
        assert_eq!(session.phase, FetchPhase::Settled);
        assert_eq!(session.recipes[0].recipe.image_urls, vec!["https://img/dal.jpg"]);
        assert_eq!(session.recipes[1].recipe.image_urls, vec![FALLBACK_IMAGE]);
        assert!(session.recipes.iter().all(|r| !r.loading_image));
    }

    #[tokio::test]
    async fn restoring_a_replaced_list_looks_up_missing_images_again() {
        let service = Arc::new(
            FakeRecipeService::new(vec![Ok(vec![recipe("Slow Dal"), recipe("Slow Rice")])])
                .with_images("Slow Dal", &["https://img/dal.jpg"])
                .holding("Slow"),
        );
        let fetcher = RecipeFetcher::new(Arc::clone(&service));
        let mut ctx = SelectionContext::new();

        let submission = fetcher.submit(FetchRequest::text("lentils, rice", None)).await;
        let stale = tokio::spawn(submission.enrichment.unwrap().run());

        fetcher.select_recipe(1, &mut ctx).await.unwrap();
        fetcher.clear_image(&mut SelectionContext::new()).await;
        ctx.mark_returning();

        let restored = fetcher.restore(&mut ctx).await.expect("restored session");
        assert_eq!(restored.session.phase, FetchPhase::EnrichingImages);
        assert!(restored.session.images_loading);
        assert!(restored.session.recipes.iter().all(|r| r.loading_image));
        let enrichment = restored.enrichment.expect("lookups for missing images");

        service.gate.add_permits(4);
        assert!(!stale.await.unwrap());
        assert!(enrichment.run().await);

        let session = fetcher.snapshot().await;
        assert_eq!(session.phase, FetchPhase::Settled);
        assert!(!session.images_loading);
        assert_eq!(session.recipes[0].recipe.image_urls, vec!["https://img/dal.jpg"]);
        assert_eq!(session.recipes[1].recipe.image_urls, vec![FALLBACK_IMAGE]);
        assert!(session.recipes.iter().all(|r| !r.loading_image));
    }

    #[tokio::test]
    async fn clear_and_mode_switch_reset_session_and_context() {
        let service = Arc::new(FakeRecipeService::new(vec![
            Ok(vec![recipe("Dal")]),
            Ok(vec![recipe("Soup")]),
        ]));
        let fetcher = RecipeFetcher::new(service);
        let mut ctx = SelectionContext::new();

        let before = fetcher.fetch(FetchRequest::text("lentils", None)).await;
        fetcher.select_recipe(0, &mut ctx).await.unwrap();

        let cleared = fetcher.clear_image(&mut ctx).await;
        assert!(cleared.generation > before.generation);
        assert!(cleared.recipes.is_empty());
        assert_eq!(cleared.phase, FetchPhase::Idle);
        assert!(ctx.selected_recipe().is_none());

        fetcher.fetch(FetchRequest::text("soup", None)).await;
        fetcher.select_recipe(0, &mut ctx).await.unwrap();
        let switched = fetcher.switch_input_mode(InputMode::Image, &mut ctx).await;
        assert_eq!(switched.input_mode, InputMode::Image);
        assert!(switched.recipes.is_empty());
        assert!(ctx.recipe_list().is_empty());
    }
}
