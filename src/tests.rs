// Handler tests for the Bookstore API
// Exercise the full router through axum-test

use super::*;
use crate::auth::{
    authenticate,
    session::{store_authorization, SessionAuthorization},
    AuthenticatedUser,
};
use crate::books::Book;
use axum::{
    http::{header, StatusCode},
    middleware,
};
use axum_test::{TestServer, TestServerConfig};
use serde_json::{json, Value};
use std::time::Duration;
use tower_sessions::Session;

const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

// ============================================================================
// Test Helpers
// ============================================================================

fn test_state() -> AppState {
    AppState::new(
        CatalogService::new(CatalogStore::seeded(), Duration::ZERO),
        AuthService::new(UserRepository::new(), TokenService::new(TEST_SECRET)),
    )
}

fn cookie_server(app: Router) -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).unwrap()
}

/// Full application router, with cookies persisted between requests
fn create_test_app() -> TestServer {
    cookie_server(create_router(test_state(), false))
}

async fn whoami(user: AuthenticatedUser) -> String {
    user.username
}

/// Stores an authorization whose token was signed with another secret
async fn forge_session(session: Session) -> StatusCode {
    let forged = TokenService::new("some-other-secret")
        .generate_access_token("mallory")
        .unwrap();
    let authorization = SessionAuthorization {
        access_token: forged,
        username: "mallory".to_string(),
    };
    store_authorization(&session, &authorization).await.unwrap();
    StatusCode::OK
}

/// API routes plus a probe route behind the auth gate
fn create_gated_app() -> TestServer {
    let state = test_state();
    let app = api_routes()
        .route(
            "/whoami",
            get(whoami).route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route("/forge", post(forge_session))
        .with_state(state)
        .layer(session_layer(false));
    cookie_server(app)
}

async fn register(server: &TestServer, username: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await
}

async fn login(server: &TestServer, username: &str, password: &str) -> axum_test::TestResponse {
    server
        .post("/login")
        .json(&json!({ "username": username, "password": password }))
        .await
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Catalog endpoints
// ============================================================================

#[tokio::test]
async fn test_list_books() {
    let server = create_test_app();
    let response = server.get("/books").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let books: Vec<Book> = response.json();
    assert_eq!(books.len(), 10);
    assert_eq!(books[0].title, "The Adventures of Tom Sawyer");
}

#[tokio::test]
async fn test_get_book_by_isbn() {
    let server = create_test_app();
    let response = server.get("/books/isbn/12345").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["ISBN"], "12345");
    assert_eq!(body["title"], "The Adventures of Tom Sawyer");
    assert_eq!(body["author"], "Sai");
    assert_eq!(body["reviews"][0]["review"], "Great book!");
}

#[tokio::test]
async fn test_get_book_by_unknown_isbn() {
    let server = create_test_app();
    let response = server.get("/books/isbn/00000").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_get_books_by_author() {
    let server = create_test_app();
    let response = server.get("/books/author/tolkien").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(titles(&response.json()).contains(&"The Hobbit".to_string()));
}

#[tokio::test]
async fn test_get_books_by_unknown_author() {
    let server = create_test_app();
    let response = server.get("/books/author/nonexistent-xyz").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "No books found for this author");
}

#[tokio::test]
async fn test_get_books_by_title() {
    let server = create_test_app();
    let response = server.get("/books/title/GREAT").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(titles(&response.json()), vec!["The Great Gatsby"]);
}

#[tokio::test]
async fn test_get_books_by_unknown_title() {
    let server = create_test_app();
    let response = server.get("/books/title/zzz").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "No books found with this title");
}

#[tokio::test]
async fn test_get_reviews() {
    let server = create_test_app();
    let response = server.get("/books/reviews/30303").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!([{ "username": "Sai", "review": "Great book!" }]));
}

#[tokio::test]
async fn test_get_reviews_of_unknown_book() {
    let server = create_test_app();
    let response = server.get("/books/reviews/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_search_by_author_and_title() {
    let server = create_test_app();
    let response = server
        .get("/books/search")
        .add_query_param("author", "sai")
        .add_query_param("title", "tom")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(titles(&response.json()), vec!["The Adventures of Tom Sawyer"]);
}

#[tokio::test]
async fn test_search_without_parameters_returns_catalog() {
    let server = create_test_app();
    let response = server.get("/books/search").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let books: Vec<Book> = response.json();
    assert_eq!(books.len(), 10);
}

#[tokio::test]
async fn test_search_empty_parameter_is_ignored() {
    let server = create_test_app();
    let response = server
        .get("/books/search")
        .add_query_param("title", "")
        .add_query_param("isbn", "303")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let isbns: Vec<String> = response
        .json::<Vec<Book>>()
        .into_iter()
        .map(|b| b.isbn)
        .collect();
    assert_eq!(isbns, vec!["30303"]);
}

#[tokio::test]
async fn test_search_matches_whitespace_like_path_lookup() {
    let server = create_test_app();

    let by_path = server.get("/books/author/sai%20").await;
    let by_search = server
        .get("/books/search")
        .add_query_param("author", "sai ")
        .await;
    assert_eq!(by_path.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(by_search.status_code(), StatusCode::NOT_FOUND);

    let by_path = server.get("/books/author/sai").await;
    let by_search = server.get("/books/search").add_query_param("author", "sai").await;
    assert_eq!(titles(&by_path.json()), titles(&by_search.json()));
}

#[tokio::test]
async fn test_search_space_in_title_is_a_filter() {
    let server = create_test_app();
    let response = server.get("/books/search").add_query_param("title", " ").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let found = titles(&response.json());
    assert_eq!(found.len(), 8);
    assert!(!found.contains(&"1984".to_string()));
    assert!(!found.contains(&"Moby-Dick".to_string()));
}

#[tokio::test]
async fn test_search_with_exclusive_filters() {
    let server = create_test_app();
    let response = server
        .get("/books/search")
        .add_query_param("title", "hobbit")
        .add_query_param("author", "orwell")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "No books found matching your search criteria");
}

// ============================================================================
// Registration and login
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = create_test_app();
    let response = register(&server, "u", "p").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_duplicate_user() {
    let server = create_test_app();
    assert_eq!(register(&server, "u", "p").await.status_code(), StatusCode::CREATED);

    let response = register(&server, "u", "p2").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_missing_password() {
    let server = create_test_app();
    let response = server.post("/register").json(&json!({ "username": "u" })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "password: must not be blank");
}

#[tokio::test]
async fn test_register_wrong_field_type() {
    let server = create_test_app();
    let response = server
        .post("/register")
        .json(&json!({ "username": 5, "password": "p" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_register_non_json_body() {
    let server = create_test_app();
    let response = server.post("/register").text("username=u&password=p").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_login_malformed_body() {
    let server = create_test_app();

    let wrong_shape = server.post("/login").json(&json!({ "username": [] })).await;
    assert_eq!(wrong_shape.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = wrong_shape.json();
    assert_eq!(body["error_code"], "VALIDATION_ERROR");

    let not_json = server.post("/login").text("alice:pw").await;
    assert_eq!(not_json.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = not_json.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_login_session_cookie_expires_with_token() {
    let server = create_test_app();
    register(&server, "alice", "pw").await;

    let response = login(&server, "alice", "pw").await;
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    let max_age: i64 = cookie
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("Max-Age="))
        .next()
        .expect("session cookie should carry Max-Age")
        .parse()
        .unwrap();
    assert!((3590..=3600).contains(&max_age), "unexpected Max-Age {}", max_age);
}

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let server = create_test_app();
    register(&server, "alice", "pw").await;

    let response = login(&server, "alice", "pw").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    let body: Value = response.json();
    assert_eq!(body["message"], "Login successful!");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_app();
    register(&server, "alice", "pw").await;

    let response = login(&server, "alice", "wrong").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = create_test_app();
    let response = login(&server, "nobody", "pw").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_users_are_isolated_per_state() {
    let first = create_test_app();
    register(&first, "alice", "pw").await;

    let second = create_test_app();
    assert_eq!(login(&second, "alice", "pw").await.status_code(), StatusCode::FORBIDDEN);
}

// ============================================================================
// Auth gate
// ============================================================================

#[tokio::test]
async fn test_gate_rejects_anonymous_request() {
    let server = create_gated_app();
    let response = server.get("/whoami").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "User not logged in");
}

#[tokio::test]
async fn test_gate_admits_logged_in_user() {
    let server = create_gated_app();
    register(&server, "alice", "pw").await;
    assert_eq!(login(&server, "alice", "pw").await.status_code(), StatusCode::OK);

    let response = server.get("/whoami").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "alice");
}

#[tokio::test]
async fn test_gate_stays_closed_after_failed_login() {
    let server = create_gated_app();
    register(&server, "alice", "pw").await;
    login(&server, "alice", "wrong").await;

    assert_eq!(server.get("/whoami").await.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_gate_rejects_token_with_bad_signature() {
    let server = create_gated_app();
    assert_eq!(server.post("/forge").await.status_code(), StatusCode::OK);

    let response = server.get("/whoami").await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "User not authenticated");
}

// ============================================================================
// OpenAPI
// ============================================================================

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = create_test_app();
    let response = server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let doc: Value = response.json();
    for path in ["/books", "/books/isbn/{isbn}", "/books/search", "/register", "/login"] {
        assert!(doc["paths"].get(path).is_some(), "missing path {}", path);
    }
}
