//! Domain entity representing an organisation.

/// A named tenant entity owning zero or more locations.
///
/// Organisations are created once and never updated or deleted by this service.
#[derive(Debug, Clone, PartialEq)]
pub struct Organisation {
    pub id: i64,
    pub name: String,
}

impl Organisation {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Input data for creating a new organisation.
#[derive(Debug, Clone)]
pub struct NewOrganisation {
    pub name: String,
}
