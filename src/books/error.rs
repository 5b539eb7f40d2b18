use crate::error::ApiError;
use thiserror::Error;

/// Catalog lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Book not found")]
    BookNotFound,

    #[error("No books found for this author")]
    NoBooksForAuthor,

    #[error("No books found with this title")]
    NoBooksWithTitle,

    #[error("No books found matching your search criteria")]
    NoSearchMatches,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::not_found(err.to_string())
    }
}
