//! API route configuration.

use crate::api::handlers::{
    create_location_handler, create_organisation_handler, get_organisation_handler,
    list_locations_handler, list_organisations_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Organisation and location routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /organisations/create`            - Register an organisation
/// - `GET  /organisations`                   - List organisations
/// - `GET  /organisations/{id}`              - Fetch one organisation
/// - `POST /organisations/create/locations`  - Create a location
/// - `GET  /organisations/{id}/locations`    - List locations, optionally inside a bounding box
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/organisations", get(list_organisations_handler))
        .route("/organisations/create", post(create_organisation_handler))
        .route(
            "/organisations/create/locations",
            post(create_location_handler),
        )
        .route("/organisations/{id}", get(get_organisation_handler))
        .route("/organisations/{id}/locations", get(list_locations_handler))
}
