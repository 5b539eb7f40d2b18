use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[serde(rename = "ISBN")]
    #[schema(example = "12345")]
    pub isbn: String,
    #[schema(example = "The Adventures of Tom Sawyer")]
    pub title: String,
    #[schema(example = "Sai")]
    pub author: String,
    pub reviews: Vec<Review>,
}

/// A review embedded in a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    #[schema(example = "Bhargav")]
    pub username: String,
    #[serde(rename = "review")]
    #[schema(example = "Great book!")]
    pub text: String,
}

impl Book {
    pub fn new(isbn: &str, title: &str, author: &str, reviews: Vec<Review>) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reviews,
        }
    }
}

impl Review {
    pub fn new(username: &str, text: &str) -> Self {
        Self {
            username: username.to_string(),
            text: text.to_string(),
        }
    }
}
