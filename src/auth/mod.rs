// Authentication module
// Registration, login with session-stored JWT access tokens, and the session gate

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, register_handler};
pub use middleware::{authenticate, AuthenticatedUser};
pub use models::{LoginRequest, MessageResponse, RegisterRequest, User};
pub use repository::UserRepository;
pub use service::AuthService;
pub use session::SessionAuthorization;
pub use token::TokenService;
