//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::organisation_service::OrganisationService`] - Organisation registry
//! - [`services::location_service::LocationService`] - Location storage and bounding-box queries

pub mod services;
