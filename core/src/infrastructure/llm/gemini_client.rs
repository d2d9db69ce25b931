use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::{
        GEMINI_KEY_PLACEHOLDERS, LLMConfig, configured_key, entities::app_errors::CoreError,
    },
    recipe::{
        ports::{GenerationOptions, LLMClient},
        value_objects::ImagePayload,
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

impl From<GenerationOptions> for GenerationConfig {
    fn from(options: GenerationOptions) -> Self {
        Self {
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
            response_mime_type: options
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: options.response_schema,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        configured_key(self.api_key.as_deref(), GEMINI_KEY_PLACEHOLDERS).ok_or_else(|| {
            CoreError::Configuration(
                "Gemini API Key is not set. Set GEMINI_API_KEY to a valid key.".to_string(),
            )
        })
    }

    async fn call_gemini_api(
        &self,
        parts: Vec<Part>,
        options: GenerationOptions,
    ) -> Result<Option<String>, CoreError> {
        let api_key = self.api_key()?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let request = GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: options.into(),
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::Upstream(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);

            let message = serde_json::from_str::<GeminiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("LLM API returned error: {}", status));

            return Err(CoreError::Upstream(message));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::Upstream(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text))
    }
}

impl LLMClient for GeminiLLMClient {
    #[instrument(skip(self, prompt, image), fields(mime_type = %image.mime_type))]
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        options: GenerationOptions,
    ) -> Result<Option<String>, CoreError> {
        let parts = vec![
            Part::Text { text: prompt },
            Part::InlineData {
                inline_data: InlineData {
                    data: image.to_base64(),
                    mime_type: image.mime_type,
                },
            },
        ];

        self.call_gemini_api(parts, options).await
    }

    #[instrument(skip(self, prompt))]
    async fn generate_with_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<Option<String>, CoreError> {
        self.call_gemini_api(vec![Part::Text { text: prompt }], options)
            .await
    }
}
