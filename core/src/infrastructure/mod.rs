pub mod image_search;
pub mod llm;
