//! In-memory catalog store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Book, UserProfile};
use crate::store::CatalogStore;

/// A [`CatalogStore`] that keeps every record in process memory.
///
/// Books are held in insertion order, so equal-scored candidates rank
/// deterministically. Reads clone; the store stays usable while the engine
/// holds results.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserProfile>>,
    books: RwLock<Vec<Book>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Insert a user, minting an id when the record carries none.
    /// Returns the stored id.
    pub fn add_user(&self, mut user: UserProfile) -> String {
        if user.id.is_empty() {
            user.id = Uuid::new_v4().to_string();
        }
        let id = user.id.clone();
        self.users.write().insert(id.clone(), user);
        id
    }

    /// Append a book, minting an id when the record carries none.
    /// Returns the stored id.
    pub fn add_book(&self, mut book: Book) -> String {
        if book.id.is_empty() {
            book.id = Uuid::new_v4().to_string();
        }
        let id = book.id.clone();
        self.books.write().push(book);
        id
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    /// Number of stored books.
    pub fn book_count(&self) -> usize {
        self.books.read().len()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.users.read().get(user_id).cloned())
    }

    async fn all_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_round_trip() {
        let store = MemoryStore::new();
        let user = UserProfile::new("Asha", "asha@example.com");
        let id = store.add_user(user.clone());

        assert_eq!(id, user.id);
        let found = store.find_user(&id).await.unwrap();
        assert_eq!(found, Some(user));
        assert!(store.find_user("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_minted_ids() {
        let store = MemoryStore::new();
        let mut user = UserProfile::new("Asha", "asha@example.com");
        user.id = String::new();
        let id = store.add_user(user);
        assert!(!id.is_empty());
        assert!(store.find_user(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_books_keep_insertion_order() {
        let store = MemoryStore::new();
        let owner = UserProfile::new("Maya", "maya@example.com");
        for title in ["First", "Second", "Third"] {
            store.add_book(Book::new("isbn", title, "Author", "desc", owner.clone()));
        }

        let books = store.all_books().await.unwrap();
        let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert_eq!(store.book_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.user_count(), 0);
        assert!(store.all_books().await.unwrap().is_empty());
    }
}
