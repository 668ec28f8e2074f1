use bookshelf_core::error::AppError;
use bookshelf_core::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] AppError),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, CatalogError>;
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
