//! Repository trait for the organisation registry.

use crate::domain::entities::{NewOrganisation, Organisation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for organisations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteOrganisationRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_organisation.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganisationRepository: Send + Sync {
    /// Stores a new organisation and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_organisation: NewOrganisation) -> Result<Organisation, AppError>;

    /// Finds an organisation by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Organisation>, AppError>;

    /// Lists all organisations in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Organisation>, AppError>;

    /// Counts stored organisations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
