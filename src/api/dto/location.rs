//! DTOs for location endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Location;

/// Request body for `POST /api/organisations/create/locations`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    pub organisation_id: i64,

    pub location_name: String,

    /// Degrees east, in `[-180, 180]`.
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Degrees north, in `[-90, 90]`.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
}

/// Location as returned by the API.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub organisation_id: i64,
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            organisation_id: location.organisation_id,
            location_name: location.name,
            longitude: location.longitude,
            latitude: location.latitude,
        }
    }
}
