//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod locations;
pub mod organisations;

pub use health::health_handler;
pub use locations::{create_location_handler, list_locations_handler};
pub use organisations::{
    create_organisation_handler, get_organisation_handler, list_organisations_handler,
};
