use crate::storage::StorageError;
use crate::wallpaper::FetchError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Failures that stop the page from starting at all. Everything past startup
/// degrades to a visual default instead of surfacing here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("usage: {0}")]
    Usage(String),
}
