// In-memory catalog of books, seeded once at startup

use crate::books::models::{Book, Review};

/// Ordered, read-only collection of books
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    books: Vec<Book>,
}

impl CatalogStore {
    /// Create a store holding the given books in order
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Create a store holding the default seed catalog
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    /// All books, in seed order
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Find the book whose ISBN equals `isbn` exactly
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// The ten books every process starts with
pub fn seed_books() -> Vec<Book> {
    let great = |user: &str| vec![Review::new(user, "Great book!")];

    vec![
        Book::new("12345", "The Adventures of Tom Sawyer", "Sai", great("Bhargav")),
        Book::new("67890", "The Adventures of Huckleberry Finn", "Bhargav", great("Bhargav")),
        Book::new("11121", "The Great Gatsby", "F. Scott Fitzgerald", great("Bhargav")),
        Book::new("31415", "To Kill a Mockingbird", "Harper Lee", great("Bhargav")),
        Book::new("27182", "1984", "George Orwell", great("Bhargav")),
        Book::new("16180", "Pride and Prejudice", "Jane Austen", great("Sai")),
        Book::new("11223", "The Catcher in the Rye", "J.D. Salinger", great("Sai")),
        Book::new("14159", "Moby-Dick", "Herman Melville", great("Sai")),
        Book::new("20202", "War and Peace", "Leo Tolstoy", great("Sai")),
        Book::new("30303", "The Hobbit", "J.R.R. Tolkien", great("Sai")),
    ]
}
