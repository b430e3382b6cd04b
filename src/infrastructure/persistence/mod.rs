//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteOrganisationRepository`] - Organisation registry
//! - [`SqliteLocationRepository`] - Location storage
//!
//! Pool construction and schema migrations live in [`pool`].

pub mod pool;
pub mod sqlite_location_repository;
pub mod sqlite_organisation_repository;

pub use pool::{connect, run_migrations};
pub use sqlite_location_repository::SqliteLocationRepository;
pub use sqlite_organisation_repository::SqliteOrganisationRepository;
