use crate::domain::recipe::ports::{ImageSearchClient, LLMClient};

#[derive(Clone)]
pub struct Service<LLM, IS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) image_search: IS,
}

impl<LLM, IS> Service<LLM, IS>
where
    LLM: LLMClient,
    IS: ImageSearchClient,
{
    pub fn new(llm_client: LLM, image_search: IS) -> Self {
        Self {
            llm_client,
            image_search,
        }
    }
}
