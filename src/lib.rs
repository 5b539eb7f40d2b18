//! Bookstore API
//!
//! A small catalog service: book lookups by ISBN, author, title and search,
//! plus user registration and login backed by a session-stored access token.

pub mod auth;
pub mod books;
pub mod config;
pub mod error;
pub mod query;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{token::ACCESS_TOKEN_TTL_SECS, AuthService, TokenService, UserRepository};
use books::{CatalogService, CatalogStore};
use config::AppConfig;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        books::handlers::list_books_handler,
        books::handlers::get_book_by_isbn_handler,
        books::handlers::get_books_by_author_handler,
        books::handlers::get_books_by_title_handler,
        books::handlers::get_reviews_handler,
        books::handlers::search_books_handler,
        auth::handlers::register_handler,
        auth::handlers::login_handler,
    ),
    components(
        schemas(
            books::Book,
            books::Review,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::MessageResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Book catalog lookups"),
        (name = "auth", description = "Registration and login")
    ),
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "Book catalog with reviews, registration and session login"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Build the state from its services
    pub fn new(catalog: CatalogService, auth: AuthService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            auth: Arc::new(auth),
        }
    }

    /// Seeded catalog, empty user repository, token service keyed by the configured secret
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            CatalogService::new(CatalogStore::seeded(), config.list_delay),
            AuthService::new(UserRepository::new(), TokenService::new(&config.jwt_secret)),
        )
    }
}

/// Route table of the API, before state and layers are applied
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(books::list_books_handler))
        .route("/books/isbn/:isbn", get(books::get_book_by_isbn_handler))
        .route("/books/author/:author", get(books::get_books_by_author_handler))
        .route("/books/title/:title", get(books::get_books_by_title_handler))
        .route("/books/reviews/:isbn", get(books::get_reviews_handler))
        .route("/books/search", get(books::search_books_handler))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler))
}

/// In-memory session layer; sessions are lost on restart
/// Idle sessions expire after the access token lifetime
pub fn session_layer(secure_cookie: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(ACCESS_TOKEN_TTL_SECS)))
}

/// Creates and configures the application router
/// Adds Swagger UI, sessions, request tracing and CORS
pub fn create_router(state: AppState, secure_cookie: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        .with_state(state)
        .layer(session_layer(secure_cookie))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests;
