// Session-stored authorization written at login and read by the auth gate

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::auth::error::AuthError;

/// Key under which the authorization is stored in the session
pub const SESSION_AUTH_KEY: &str = "authorization";

/// Authorization data kept in the caller's session after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAuthorization {
    pub access_token: String,
    pub username: String,
}

/// Store the authorization in the session, replacing any previous one
pub async fn store_authorization(
    session: &Session,
    authorization: &SessionAuthorization,
) -> Result<(), AuthError> {
    session.cycle_id().await?;
    session.insert(SESSION_AUTH_KEY, authorization).await?;
    Ok(())
}

/// Read the authorization from the session, if the caller has logged in
pub async fn load_authorization(session: &Session) -> Result<Option<SessionAuthorization>, AuthError> {
    Ok(session.get::<SessionAuthorization>(SESSION_AUTH_KEY).await?)
}
