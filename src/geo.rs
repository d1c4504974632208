//! Geographic points and great-circle distance.
//!
//! Proximity scoring measures the distance between a reader and a book's
//! owner with the Haversine formula on a spherical Earth. Distances are in
//! kilometers throughout the crate.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfmatchError};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical point with latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point, validating the coordinate ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ShelfmatchError::invalid_argument(format!(
                "Latitude must be between -90 and 90, got {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ShelfmatchError::invalid_argument(format!(
                "Longitude must be between -180 and 180, got {lon}"
            )));
        }
        Ok(GeoPoint { lat, lon })
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}
