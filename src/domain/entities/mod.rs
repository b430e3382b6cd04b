//! Core domain entities.
//!
//! Entities are plain data structures. Each has a companion `New*` struct used
//! when creating records, before the store has assigned an identifier.
//!
//! # Entity Types
//!
//! - [`Organisation`] - A named tenant owning locations
//! - [`Location`] - A geographic point owned by one organisation

pub mod location;
pub mod organisation;

pub use location::{Location, NewLocation};
pub use organisation::{NewOrganisation, Organisation};
