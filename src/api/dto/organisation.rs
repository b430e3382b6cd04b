//! DTOs for the organisation registry.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Organisation;

/// Request body for `POST /api/organisations/create`.
#[derive(Debug, Deserialize)]
pub struct CreateOrganisationRequest {
    pub name: String,
}

/// Organisation as returned by the API.
#[derive(Debug, Serialize)]
pub struct OrganisationResponse {
    pub id: i64,
    pub name: String,
}

impl From<Organisation> for OrganisationResponse {
    fn from(organisation: Organisation) -> Self {
        Self {
            id: organisation.id,
            name: organisation.name,
        }
    }
}
