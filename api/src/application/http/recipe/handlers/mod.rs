pub mod clear_session;
pub mod get_session;
pub mod restore_session;
pub mod select_recipe;
pub mod submit_image;
pub mod submit_text;
pub mod switch_mode;
