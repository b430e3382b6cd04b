//! Organisation registry service.

use crate::domain::entities::{NewOrganisation, Organisation};
use crate::domain::repositories::OrganisationRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for registering and looking up organisations.
pub struct OrganisationService<R: OrganisationRepository> {
    repository: Arc<R>,
}

impl<R: OrganisationRepository> OrganisationService<R> {
    /// Creates a new organisation service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new organisation. Any name is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_organisation(&self, name: String) -> Result<Organisation, AppError> {
        let organisation = self.repository.create(NewOrganisation { name }).await?;

        tracing::info!(
            organisation_id = organisation.id,
            name = %organisation.name,
            "organisation created"
        );

        Ok(organisation)
    }

    /// Retrieves an organisation by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organisation does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_organisation(&self, id: i64) -> Result<Organisation, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(organisation_id = id, "organisation not found");
            AppError::not_found("Organisation not found", json!({ "id": id }))
        })
    }

    /// Lists all organisations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_organisations(&self) -> Result<Vec<Organisation>, AppError> {
        self.repository.list().await
    }

    /// Counts registered organisations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_organisations(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
