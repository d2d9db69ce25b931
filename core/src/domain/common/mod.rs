pub mod entities;
pub mod services;

/// Local asset shown whenever image search yields nothing.
pub const FALLBACK_IMAGE: &str = "assets/images/default-food-image.jpg";

pub const GEMINI_KEY_PLACEHOLDERS: &[&str] = &[
    "YOUR_GEMINI_API_KEY_HERE",
    "YOUR_GEMINI_API_KEY_HERE_DEV",
    "YOUR_GEMINI_API_KEY_HERE_PROD",
];

pub const PIXABAY_KEY_PLACEHOLDERS: &[&str] = &["YOUR_PIXABAY_API_KEY_HERE"];

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_PIXABAY_BASE_URL: &str = "https://pixabay.com";

#[derive(Clone, Debug)]
pub struct RecipeLensConfig {
    pub llm: LLMConfig,
    pub image_search: ImageSearchConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct ImageSearchConfig {
    pub pixabay_api_key: Option<String>,
    pub pixabay_base_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            pixabay_api_key: None,
            pixabay_base_url: DEFAULT_PIXABAY_BASE_URL.to_string(),
        }
    }
}

/// Returns the credential when it is set to something other than a known placeholder.
pub fn configured_key<'a>(key: Option<&'a str>, placeholders: &[&str]) -> Option<&'a str> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && !placeholders.contains(k))
}
