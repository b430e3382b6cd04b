//! Handlers for the organisation registry endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::organisation::{CreateOrganisationRequest, OrganisationResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new organisation.
///
/// # Endpoint
///
/// `POST /api/organisations/create`
///
/// # Request Body
///
/// ```json
/// { "name": "Climate Research Institute" }
/// ```
///
/// # Response
///
/// `200 OK` with the stored organisation, e.g. `{ "id": 1, "name": "Climate Research Institute" }`.
pub async fn create_organisation_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganisationRequest>,
) -> Result<Json<OrganisationResponse>, AppError> {
    let organisation = state
        .organisation_service
        .create_organisation(payload.name)
        .await?;

    Ok(Json(organisation.into()))
}

/// Lists all organisations.
///
/// # Endpoint
///
/// `GET /api/organisations`
pub async fn list_organisations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganisationResponse>>, AppError> {
    let organisations = state.organisation_service.list_organisations().await?;

    Ok(Json(
        organisations
            .into_iter()
            .map(OrganisationResponse::from)
            .collect(),
    ))
}

/// Fetches one organisation by ID.
///
/// # Endpoint
///
/// `GET /api/organisations/{id}`
///
/// # Errors
///
/// Returns 404 if the organisation does not exist.
pub async fn get_organisation_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrganisationResponse>, AppError> {
    let organisation = state.organisation_service.get_organisation(id).await?;

    Ok(Json(organisation.into()))
}
