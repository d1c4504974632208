//! Book recommendations: content, location, and hybrid scoring.
//!
//! The [`RecommendationEngine`] orchestrates the whole pipeline. For each
//! request it loads the user and the candidate books from the injected
//! [`CatalogStore`](crate::store::CatalogStore), scores every candidate under
//! the requested mode, ranks by score descending, and returns the top books
//! with scores stripped:
//!
//! - [`RecommendMode::ContentBased`] compares TF-IDF vectors of the user's
//!   preferences against each book's text with cosine similarity.
//! - [`RecommendMode::LocationBased`] rewards books whose owners are close
//!   to the user, by Haversine distance.
//! - [`RecommendMode::Hybrid`] blends the two with configurable weights.

pub mod config;
pub mod engine;

pub use config::RecommendConfig;
pub use engine::RecommendationEngine;

use serde::{Deserialize, Serialize};

/// Default number of books a recommendation returns.
pub const DEFAULT_LIMIT: usize = 10;

/// Which scoring mode a recommendation request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendMode {
    /// TF-IDF similarity between user preferences and book text.
    ContentBased,
    /// Haversine proximity between the user and each book's owner.
    LocationBased,
    /// Weighted blend of distance and content components.
    Hybrid,
}
