//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OrganisationRepository`] - Organisation registry
//! - [`LocationRepository`] - Location storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod location_repository;
pub mod organisation_repository;

pub use location_repository::LocationRepository;
pub use organisation_repository::OrganisationRepository;

#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use organisation_repository::MockOrganisationRepository;
