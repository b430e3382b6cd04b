//! Repository trait for location storage.

use crate::domain::entities::{Location, NewLocation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for locations.
///
/// Does not check that the owning organisation exists; that is the job of
/// [`crate::application::services::LocationService`]. The schema's foreign key
/// still rejects dangling references.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Stores a new location and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the organisation reference is dangling.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError>;

    /// Lists every location owned by an organisation, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_organisation(&self, organisation_id: i64) -> Result<Vec<Location>, AppError>;

    /// Counts stored locations across all organisations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
