use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("\"{title}\" by {author} is already in your library")]
    Duplicate { title: String, author: String },

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid book: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Changes were applied but NOT saved to {}: {reason}. They will be lost when shelf exits", .path.display())]
    Unsaved { path: PathBuf, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
