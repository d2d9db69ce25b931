use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Configuration(String),

    #[error("API request failed: {0}")]
    Upstream(String),

    #[error("Invalid or malformed response from the AI. Please try again or refine your input.")]
    MalformedResponse(String),

    #[error(
        "The uploaded image does not appear to contain food ingredients. Please upload a clear photo of ingredients."
    )]
    ContentMismatch,

    #[error("{0}")]
    Validation(String),

    #[error("No recipes found. Please try different ingredients or a different picture.")]
    NoRecipesFound,

    #[error("Not found")]
    NotFound,
}

impl CoreError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::error!("Malformed AI response: {}", reason);
        CoreError::MalformedResponse(reason)
    }
}
