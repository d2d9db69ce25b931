use std::{sync::Arc, time::Duration};

use crate::{
    domain::{
        common::{RecipeLensConfig, services::Service},
        fetch::RecipeFetcher,
    },
    infrastructure::{image_search::PixabayImageSearch, llm::GeminiLLMClient},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

pub type RecipeLensService = Service<GeminiLLMClient, PixabayImageSearch>;

pub fn create_service(config: RecipeLensConfig) -> Result<RecipeLensService, anyhow::Error> {
    let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    if config.llm.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, recipe generation will fail");
    }
    if config.image_search.pixabay_api_key.is_none() {
        tracing::warn!("PIXABAY_API_KEY is not set, the fallback image will be used");
    }

    Ok(Service::new(
        GeminiLLMClient::new(config.llm, client.clone()),
        PixabayImageSearch::new(config.image_search, client),
    ))
}

pub fn create_fetcher(config: RecipeLensConfig) -> Result<RecipeFetcher<RecipeLensService>, anyhow::Error> {
    Ok(RecipeFetcher::new(Arc::new(create_service(config)?)))
}
