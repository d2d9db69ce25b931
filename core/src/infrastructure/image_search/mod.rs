pub mod pixabay_client;

pub use pixabay_client::PixabayImageSearch;
