//! # Location Registry
//!
//! A small web backend for registering organisations, recording geographic
//! locations that belong to them, and querying those locations inside a
//! latitude/longitude bounding box. Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the bounding-box filter and repository traits
//! - **Application Layer** ([`application`]) - Organisation and location services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://locations.db"   # optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/organisations/create -H 'content-type: application/json' \
//!      -d '{"name": "Climate Research Institute"}'
//! curl 'localhost:3000/api/organisations/1/locations?bounding_box=46.5,12.0,49.0,17.0'
//! ```
//!
//! Migrations in `migrations/` are embedded and applied at startup.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LocationService, OrganisationService};
    pub use crate::domain::bounding_box::BoundingBox;
    pub use crate::domain::entities::{Location, Organisation};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
