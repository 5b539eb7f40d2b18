// Session authentication gate for protected routes

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;
use tracing::{debug, warn};

use crate::auth::{error::AuthError, session::load_authorization};
use crate::AppState;

/// Identity attached to a request that passed [`authenticate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::NotLoggedIn)
    }
}

/// Middleware requiring a valid access token in the caller's session.
///
/// Attach with `axum::middleware::from_fn_with_state`. The session layer must
/// wrap the protected routes.
pub async fn authenticate(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let endpoint = request.uri().path().to_string();

    let authorization = load_authorization(&session).await?.ok_or_else(|| {
        warn!("No session authorization for protected endpoint: {}", endpoint);
        AuthError::NotLoggedIn
    })?;

    let claims = state
        .auth
        .verify_token(&authorization.access_token)
        .map_err(|e| {
            warn!("Rejected session token for endpoint {}: {}", endpoint, e);
            e
        })?;

    debug!("Authenticated user={} endpoint={}", claims.username, endpoint);
    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });
    Ok(next.run(request).await)
}
