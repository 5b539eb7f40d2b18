// Authentication service - business logic layer

use crate::auth::{
    error::AuthError,
    models::User,
    password::PasswordService,
    repository::UserRepository,
    token::{Claims, TokenService},
};

/// Authentication service coordinating registration, login and token checks
pub struct AuthService {
    user_repo: UserRepository,
    token_service: TokenService,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: TokenService) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user, storing only the password hash
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if self.user_repo.username_exists(username).await {
            return Err(AuthError::UserAlreadyExists);
        }

        let password = password.to_string();
        let password_hash = run_blocking(move || PasswordService::hash_password(&password)).await?;
        // create_user re-checks under the write lock
        let user = self.user_repo.create_user(username, &password_hash).await?;

        tracing::info!("Registered user: {}", user.username);
        Ok(user)
    }

    /// Check credentials and issue an access token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        let password = password.to_string();
        let hash = user.password_hash.clone();
        if !run_blocking(move || PasswordService::verify_password(&password, &hash)).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.generate_access_token(&user.username)?;
        tracing::info!("User logged in: {}", user.username);
        Ok(token)
    }

    /// Validate an access token
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.token_service.validate_access_token(token)
    }
}

/// Run Argon2 work on the blocking pool so async workers stay free
async fn run_blocking<T, F>(work: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::PasswordHashError(e.to_string()))?
}
