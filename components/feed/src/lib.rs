use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("feed item must be an object, got {0}")]
    NotAnObject(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod image;
pub mod item;
pub mod summary;
pub mod text;

pub use image::find_image;
pub use item::{FeedItem, Media};
pub use summary::ItemSummary;
pub use text::plain_text;
