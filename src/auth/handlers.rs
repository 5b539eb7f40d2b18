// HTTP handlers for registration and login

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::auth::{
    models::{LoginRequest, MessageResponse, RegisterRequest},
    session::{store_authorization, SessionAuthorization},
};
use crate::error::ApiError;
use crate::AppState;

/// Register a new user
/// POST /register
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "User already exists or invalid input", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!("Registration attempt for username: {}", request.username);
    request.validate()?;

    state.auth.register(&request.username, &request.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Log in and store the access token in the caller's session
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 403, description = "Invalid username or password", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::debug!("Login attempt for username: {}", request.username);

    let access_token = state.auth.login(&request.username, &request.password).await?;

    let authorization = SessionAuthorization {
        access_token,
        username: request.username,
    };
    store_authorization(&session, &authorization).await?;

    Ok(Json(MessageResponse::new("Login successful!")))
}
