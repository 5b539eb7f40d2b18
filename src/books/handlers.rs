// HTTP handlers for catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::books::models::{Book, Review};
use crate::error::ApiError;
use crate::query::{SearchFilter, SearchQuery};
use crate::AppState;

/// List every book
/// GET /books
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>)
    ),
    tag = "books"
)]
pub async fn list_books_handler(State(state): State<AppState>) -> Json<Vec<Book>> {
    tracing::debug!("Listing all books");
    Json(state.catalog.list_all().await)
}

/// Get one book by exact ISBN
/// GET /books/isbn/:isbn
#[utoipa::path(
    get,
    path = "/books/isbn/{isbn}",
    params(("isbn" = String, Path, description = "Exact ISBN")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
pub async fn get_book_by_isbn_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    tracing::debug!("Fetching book with isbn: {}", isbn);
    Ok(Json(state.catalog.get_by_isbn(&isbn)?))
}

/// Get books by author substring
/// GET /books/author/:author
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    params(("author" = String, Path, description = "Case-insensitive author fragment")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No books found for this author", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
pub async fn get_books_by_author_handler(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    tracing::debug!("Fetching books by author: {}", author);
    Ok(Json(state.catalog.get_by_author(&author)?))
}

/// Get books by title substring
/// GET /books/title/:title
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    params(("title" = String, Path, description = "Case-insensitive title fragment")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No books found with this title", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
pub async fn get_books_by_title_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    tracing::debug!("Fetching books by title: {}", title);
    Ok(Json(state.catalog.get_by_title(&title)?))
}

/// Get the reviews of a book
/// GET /books/reviews/:isbn
#[utoipa::path(
    get,
    path = "/books/reviews/{isbn}",
    params(("isbn" = String, Path, description = "Exact ISBN")),
    responses(
        (status = 200, description = "Reviews of the book", body = Vec<Review>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
pub async fn get_reviews_handler(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    tracing::debug!("Fetching reviews for isbn: {}", isbn);
    Ok(Json(state.catalog.get_reviews(&isbn)?))
}

/// Search books by any combination of title, author and ISBN
/// GET /books/search
#[utoipa::path(
    get,
    path = "/books/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Books matching every provided filter", body = Vec<Book>),
        (status = 404, description = "No books found matching your search criteria", body = crate::error::ErrorResponse)
    ),
    tag = "books"
)]
pub async fn search_books_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let filter = SearchFilter::from(query);
    tracing::debug!("Searching books with filter: {:?}", filter);
    Ok(Json(state.catalog.search(&filter)?))
}
