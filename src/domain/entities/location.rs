//! Domain entity representing a geographic location.

use crate::domain::bounding_box::BoundingBox;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// A named geographic point owned by one organisation.
///
/// Locations are immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    pub organisation_id: i64,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(id: i64, organisation_id: i64, name: String, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            organisation_id,
            name,
            longitude,
            latitude,
        }
    }

    /// Returns true if this location lies inside `bbox` (edges included).
    pub fn is_within(&self, bbox: &BoundingBox) -> bool {
        bbox.contains(self.longitude, self.latitude)
    }
}

/// Input data for creating a new location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub organisation_id: i64,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}
