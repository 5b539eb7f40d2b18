pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

pub use error::CatalogError;
pub use handlers::*;
pub use models::{Book, Review};
pub use service::CatalogService;
pub use store::CatalogStore;
