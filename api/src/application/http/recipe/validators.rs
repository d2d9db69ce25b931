use recipelens_core::domain::fetch::InputMode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitTextRequest {
    #[validate(length(max = 5000, message = "text must be at most 5000 characters"))]
    pub text: String,
    #[validate(length(max = 64, message = "cuisine must be at most 64 characters"))]
    pub cuisine: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SwitchModeRequest {
    pub mode: InputMode,
}
