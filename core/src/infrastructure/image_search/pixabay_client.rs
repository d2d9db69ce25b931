use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{
        ImageSearchConfig, PIXABAY_KEY_PLACEHOLDERS, configured_key,
        entities::app_errors::CoreError,
    },
    recipe::ports::ImageSearchClient,
};

const RESULTS_PER_PAGE: u32 = 3;

#[derive(Debug, Clone)]
pub struct PixabayImageSearch {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
}

impl PixabayImageSearch {
    pub fn new(config: ImageSearchConfig, client: Client) -> Self {
        Self {
            api_key: config.pixabay_api_key,
            base_url: config.pixabay_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// The query is expected to be sanitized already; it is only percent-encoded here.
    fn search_url(&self, api_key: &str, query: &str) -> String {
        format!(
            "{}/api/?key={}&q={}&image_type=photo&per_page={}&safesearch=true&orientation=horizontal&category=food",
            self.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(query),
            RESULTS_PER_PAGE
        )
    }
}

impl ImageSearchClient for PixabayImageSearch {
    #[instrument(skip(self))]
    async fn search(&self, query: String) -> Result<Vec<String>, CoreError> {
        let api_key = configured_key(self.api_key.as_deref(), PIXABAY_KEY_PLACEHOLDERS)
            .ok_or_else(|| CoreError::Configuration("Pixabay API Key is not set.".to_string()))?;

        let response = self
            .client
            .get(self.search_url(api_key, &query))
            .send()
            .await
            .map_err(|e| CoreError::Upstream(format!("Image search error: {}", e)))?;

        if !response.status().is_success() {
            return Err(CoreError::Upstream(format!(
                "Image search returned error: {}",
                response.status()
            )));
        }

        let body: PixabayResponse = response.json().await.map_err(|e| {
            CoreError::Upstream(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(body
            .hits
            .into_iter()
            .take(RESULTS_PER_PAGE as usize)
            .map(|hit| hit.webformat_url)
            .collect())
    }
}
