//! Read-only access to the marketplace catalog.
//!
//! The recommendation engine receives a [`CatalogStore`] and never writes
//! through it. Where user and book records actually live is the surrounding
//! application's business; [`MemoryStore`] covers tests and embedded use.

pub mod memory;

pub use memory::MemoryStore;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Book, UserProfile};

/// Read access to users and books.
///
/// Implementations must be `Send + Sync` so one store can serve concurrent
/// recommendation requests.
#[async_trait]
pub trait CatalogStore: Send + Sync + Debug {
    /// Look up a user by id. `None` when no such user exists.
    async fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>>;

    /// Every book in the catalog, owners embedded, in stable store order.
    async fn all_books(&self) -> Result<Vec<Book>>;
}
