//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Scoring constants and blend weights for the recommendation engine.
///
/// Defaults match the marketplace's production tuning: cosine similarity
/// scaled to a ten-point band, proximity scored as `100 / (1 + km)` with a
/// flat bonus inside ten kilometers, and a 40/60 distance-to-content split
/// in hybrid mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Multiplier applied to cosine similarity in content scores.
    pub content_scale: f64,
    /// Numerator of the inverse-distance proximity score.
    pub distance_base: f64,
    /// Radius in kilometers within which the proximity bonus applies.
    pub proximity_radius_km: f64,
    /// Flat bonus for owners inside the radius in location-based mode.
    pub proximity_bonus: f64,
    /// Flat bonus for owners inside the radius in hybrid mode.
    pub hybrid_proximity_bonus: f64,
    /// Hybrid weight on the distance component.
    pub distance_weight: f64,
    /// Hybrid weight on the content component.
    pub content_weight: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            content_scale: 10.0,
            distance_base: 100.0,
            proximity_radius_km: 10.0,
            proximity_bonus: 20.0,
            hybrid_proximity_bonus: 5.0,
            distance_weight: 0.4,
            content_weight: 0.6,
        }
    }
}
