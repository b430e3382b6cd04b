//! Location storage and bounding-box query service.

use std::sync::Arc;

use crate::domain::bounding_box::BoundingBox;
use crate::domain::entities::location::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::domain::entities::{Location, NewLocation};
use crate::domain::repositories::{LocationRepository, OrganisationRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for creating locations and listing them per organisation.
///
/// Every operation first resolves the organisation through the registry, so an
/// unknown organisation is reported as [`AppError::NotFound`] before the
/// location table is touched.
pub struct LocationService<L: LocationRepository, O: OrganisationRepository> {
    location_repository: Arc<L>,
    organisation_repository: Arc<O>,
}

impl<L: LocationRepository, O: OrganisationRepository> LocationService<L, O> {
    /// Creates a new location service.
    pub fn new(location_repository: Arc<L>, organisation_repository: Arc<O>) -> Self {
        Self {
            location_repository,
            organisation_repository,
        }
    }

    /// Creates a location owned by `organisation_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a coordinate is out of range or not finite.
    /// Returns [`AppError::NotFound`] if the organisation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_location(
        &self,
        organisation_id: i64,
        name: String,
        longitude: f64,
        latitude: f64,
    ) -> Result<Location, AppError> {
        validate_coordinates(longitude, latitude)?;
        self.ensure_organisation_exists(organisation_id).await?;

        let location = self
            .location_repository
            .create(NewLocation {
                organisation_id,
                name,
                longitude,
                latitude,
            })
            .await?;

        tracing::info!(
            location_id = location.id,
            organisation_id,
            name = %location.name,
            "location created"
        );

        Ok(location)
    }

    /// Lists the locations of an organisation, optionally restricted to a bounding box.
    ///
    /// Without a box every location of the organisation is returned. With a box
    /// only locations inside it (edges included) are returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organisation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_locations(
        &self,
        organisation_id: i64,
        bbox: Option<BoundingBox>,
    ) -> Result<Vec<Location>, AppError> {
        self.ensure_organisation_exists(organisation_id).await?;

        let locations = self
            .location_repository
            .list_by_organisation(organisation_id)
            .await?;

        let Some(bbox) = bbox else {
            return Ok(locations);
        };

        let total = locations.len();
        let within: Vec<Location> = locations
            .into_iter()
            .filter(|location| location.is_within(&bbox))
            .collect();

        tracing::debug!(
            organisation_id,
            total,
            matched = within.len(),
            "bounding box filter applied"
        );

        Ok(within)
    }

    /// Counts stored locations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_locations(&self) -> Result<i64, AppError> {
        self.location_repository.count().await
    }

    async fn ensure_organisation_exists(&self, organisation_id: i64) -> Result<(), AppError> {
        match self.organisation_repository.find_by_id(organisation_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(
                "Organisation not found",
                json!({ "id": organisation_id }),
            )),
        }
    }
}

/// Checks that a point has finite, in-range coordinates.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the offending coordinate.
fn validate_coordinates(longitude: f64, latitude: f64) -> Result<(), AppError> {
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(AppError::bad_request(
            "Longitude out of range",
            json!({ "longitude": longitude.to_string(), "min": -180.0, "max": 180.0 }),
        ));
    }

    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(AppError::bad_request(
            "Latitude out of range",
            json!({ "latitude": latitude.to_string(), "min": -90.0, "max": 90.0 }),
        ));
    }

    Ok(())
}
