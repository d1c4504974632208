//! # Shelfmatch
//!
//! A book recommendation engine for swap marketplaces.
//!
//! ## Features
//!
//! - Content-based scoring with TF-IDF vectors and cosine similarity
//! - Location-based scoring with Haversine distance to book owners
//! - Hybrid mode blending both with configurable weights
//! - Flexible text analysis pipeline
//! - Pluggable, read-only catalog stores

pub mod analysis;
pub mod error;
pub mod geo;
pub mod model;
pub mod recommend;
pub mod scoring;
pub mod store;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
