// Authentication and session error types

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::ApiError;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No authorization stored in the caller's session
    #[error("User not logged in")]
    NotLoggedIn,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Password hashing error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Session store error: {0}")]
    SessionError(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserAlreadyExists => ApiError::Conflict {
                message: err.to_string(),
            },
            AuthError::InvalidCredentials | AuthError::NotLoggedIn => {
                ApiError::Forbidden(err.to_string())
            }
            // Signature and expiry failures look the same to the client
            AuthError::InvalidToken | AuthError::ExpiredToken => {
                tracing::debug!("Token rejected: {}", err);
                ApiError::Forbidden("User not authenticated".to_string())
            }
            AuthError::PasswordHashError(_)
            | AuthError::TokenGenerationError(_)
            | AuthError::SessionError(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AuthError::SessionError(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
