//! Catalog records the recommender consumes.
//!
//! These mirror the marketplace's persisted entities. The recommendation
//! pipeline only ever reads them; creating, updating, and deleting records
//! belongs to the surrounding application.

pub mod book;
pub mod user;

pub use book::Book;
pub use user::UserProfile;
