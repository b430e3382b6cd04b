//! Query parameters selecting an optional bounding box.

use serde::Deserialize;

use crate::domain::bounding_box::{BoundingBox, BoundingBoxError};

/// Bounding box query for `GET /api/organisations/{id}/locations`.
///
/// Two encodings are accepted, never both at once:
///
/// - `?bounding_box=sw_lat,sw_lon,ne_lat,ne_lon`
/// - `?sw_lat=..&sw_lon=..&ne_lat=..&ne_lon=..`
///
/// Values are kept as raw strings so that a non-numeric coordinate surfaces as
/// a [`BoundingBoxError`] naming the parameter instead of a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BoundingBoxQuery {
    pub bounding_box: Option<String>,
    pub sw_lat: Option<String>,
    pub sw_lon: Option<String>,
    pub ne_lat: Option<String>,
    pub ne_lon: Option<String>,
}

impl BoundingBoxQuery {
    /// Validates the parameters into at most one [`BoundingBox`].
    ///
    /// # Errors
    ///
    /// Returns [`BoundingBoxError::Ambiguous`] if both encodings are present,
    /// otherwise whatever [`BoundingBox::parse`] or [`BoundingBox::from_corners`] reports.
    pub fn into_bounding_box(self) -> Result<Option<BoundingBox>, BoundingBoxError> {
        let corners_given = [&self.sw_lat, &self.sw_lon, &self.ne_lat, &self.ne_lon]
            .iter()
            .any(|corner| corner.is_some());

        match self.bounding_box {
            Some(_) if corners_given => Err(BoundingBoxError::Ambiguous),
            Some(raw) => BoundingBox::parse(&raw).map(Some),
            None => BoundingBox::from_corners(
                self.sw_lat.as_deref(),
                self.sw_lon.as_deref(),
                self.ne_lat.as_deref(),
                self.ne_lon.as_deref(),
            ),
        }
    }
}
