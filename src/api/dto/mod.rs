//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! with constrained fields also derive `validator::Validate`.

pub mod bounding_box;
pub mod health;
pub mod location;
pub mod organisation;
