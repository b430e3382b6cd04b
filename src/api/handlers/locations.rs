//! Handlers for location endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::bounding_box::BoundingBoxQuery;
use crate::api::dto::location::{CreateLocationRequest, LocationResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a location owned by an existing organisation.
///
/// # Endpoint
///
/// `POST /api/organisations/create/locations`
///
/// # Request Body
///
/// ```json
/// {
///   "organisation_id": 1,
///   "location_name": "Salzburg",
///   "longitude": 13.055,
///   "latitude": 47.8095
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a coordinate is out of range.
/// Returns 404 if `organisation_id` is unknown.
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .create_location(
            payload.organisation_id,
            payload.location_name,
            payload.longitude,
            payload.latitude,
        )
        .await?;

    Ok(Json(location.into()))
}

/// Lists an organisation's locations, optionally inside a bounding box.
///
/// # Endpoint
///
/// `GET /api/organisations/{id}/locations`
///
/// # Query Parameters
///
/// Either `bounding_box=sw_lat,sw_lon,ne_lat,ne_lon` or all four of
/// `sw_lat`, `sw_lon`, `ne_lat`, `ne_lon`. Without them every location is returned.
///
/// # Errors
///
/// Returns 404 if the organisation does not exist, whatever the query string holds.
/// Returns 400 if the bounding box is partial, non-numeric, inverted, given twice
/// or the query string itself cannot be decoded.
pub async fn list_locations_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    query: Result<Query<BoundingBoxQuery>, QueryRejection>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    state.organisation_service.get_organisation(id).await?;

    let Query(query) = query?;
    let bbox = query.into_bounding_box()?;

    let locations = state.location_service.list_locations(id, bbox).await?;

    Ok(Json(
        locations.into_iter().map(LocationResponse::from).collect(),
    ))
}
