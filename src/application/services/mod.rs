//! Business logic services for the application layer.

pub mod location_service;
pub mod organisation_service;

pub use location_service::LocationService;
pub use organisation_service::OrganisationService;
