pub mod common;
pub mod detail;
pub mod fetch;
pub mod recipe;
pub mod selection;
