//! Domain layer containing business entities and logic.
//!
//! Defines entities, the bounding-box value object and repository interfaces,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Organisations and locations
//! - [`bounding_box`] - Rectangle filter over latitude/longitude
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod bounding_box;
pub mod entities;
pub mod repositories;
