use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CarouselDirection {
    Next,
    Previous,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct NavigateCarouselRequest {
    pub direction: CarouselDirection,
}
