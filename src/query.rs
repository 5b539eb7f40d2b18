use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters accepted by `GET /books/search`
/// All fields are optional; an absent or empty value means "filter not applied"
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
    /// Substring of the ISBN
    pub isbn: Option<String>,
}

/// Normalized search filter
/// Empty values are dropped; everything else is matched as given
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

impl SearchFilter {
    /// True when no filter will be applied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.isbn.is_none()
    }
}

impl From<SearchQuery> for SearchFilter {
    fn from(query: SearchQuery) -> Self {
        Self {
            title: normalize_string(query.title),
            author: normalize_string(query.author),
            isbn: normalize_string(query.isbn),
        }
    }
}

/// Returns None if the string is empty; whitespace is significant
fn normalize_string(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Case-insensitive substring match
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
