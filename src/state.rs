//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{LocationService, OrganisationService};
use crate::infrastructure::persistence::{SqliteLocationRepository, SqliteOrganisationRepository};

pub type SqliteOrganisationService = OrganisationService<SqliteOrganisationRepository>;
pub type SqliteLocationService =
    LocationService<SqliteLocationRepository, SqliteOrganisationRepository>;

/// Services backed by the SQLite repositories.
///
/// Cloned per request; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub organisation_service: Arc<SqliteOrganisationService>,
    pub location_service: Arc<SqliteLocationService>,
}

impl AppState {
    /// Wires repositories and services around one connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let organisation_repository = Arc::new(SqliteOrganisationRepository::new(pool.clone()));
        let location_repository = Arc::new(SqliteLocationRepository::new(pool));

        Self {
            organisation_service: Arc::new(OrganisationService::new(
                organisation_repository.clone(),
            )),
            location_service: Arc::new(LocationService::new(
                location_repository,
                organisation_repository,
            )),
        }
    }
}
