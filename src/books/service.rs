use crate::books::{
    error::CatalogError,
    models::{Book, Review},
    store::CatalogStore,
};
use crate::query::{contains_ignore_case, SearchFilter};
use std::time::Duration;

/// Read-only queries over the catalog
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: CatalogStore,
    list_delay: Duration,
}

impl CatalogService {
    /// Create a new CatalogService
    ///
    /// `list_delay` is awaited by [`CatalogService::list_all`] before returning.
    pub fn new(store: CatalogStore, list_delay: Duration) -> Self {
        Self { store, list_delay }
    }

    /// Every book, in catalog order
    pub async fn list_all(&self) -> Vec<Book> {
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        self.store.all().to_vec()
    }

    /// The book whose ISBN equals `isbn` exactly
    pub fn get_by_isbn(&self, isbn: &str) -> Result<Book, CatalogError> {
        self.store
            .find_by_isbn(isbn)
            .cloned()
            .ok_or(CatalogError::BookNotFound)
    }

    /// Books whose author contains `author`, ignoring case
    pub fn get_by_author(&self, author: &str) -> Result<Vec<Book>, CatalogError> {
        non_empty(
            self.matching(|b| contains_ignore_case(&b.author, author)),
            CatalogError::NoBooksForAuthor,
        )
    }

    /// Books whose title contains `title`, ignoring case
    pub fn get_by_title(&self, title: &str) -> Result<Vec<Book>, CatalogError> {
        non_empty(
            self.matching(|b| contains_ignore_case(&b.title, title)),
            CatalogError::NoBooksWithTitle,
        )
    }

    /// Reviews of the book with the given ISBN
    pub fn get_reviews(&self, isbn: &str) -> Result<Vec<Review>, CatalogError> {
        self.store
            .find_by_isbn(isbn)
            .map(|b| b.reviews.clone())
            .ok_or(CatalogError::BookNotFound)
    }

    /// Narrow the catalog by title, then author, then ISBN.
    ///
    /// Filters that are `None` are skipped, so an empty filter returns the
    /// whole catalog. The ISBN filter is a case-sensitive substring match.
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<Book>, CatalogError> {
        let mut books: Vec<&Book> = self.store.all().iter().collect();

        if let Some(title) = &filter.title {
            books.retain(|b| contains_ignore_case(&b.title, title));
        }
        if let Some(author) = &filter.author {
            books.retain(|b| contains_ignore_case(&b.author, author));
        }
        if let Some(isbn) = &filter.isbn {
            books.retain(|b| b.isbn.contains(isbn.as_str()));
        }

        non_empty(
            books.into_iter().cloned().collect(),
            CatalogError::NoSearchMatches,
        )
    }

    fn matching<P>(&self, predicate: P) -> Vec<Book>
    where
        P: Fn(&Book) -> bool,
    {
        self.store
            .all()
            .iter()
            .filter(|&b| predicate(b))
            .cloned()
            .collect()
    }
}

fn non_empty<T>(items: Vec<T>, err: CatalogError) -> Result<Vec<T>, CatalogError> {
    if items.is_empty() {
        Err(err)
    } else {
        Ok(items)
    }
}
