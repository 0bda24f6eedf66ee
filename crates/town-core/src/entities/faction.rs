//! Faction entity

use std::cmp::Ordering;

use crate::value_objects::FactionType;

/// Faction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faction {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: FactionType,
    pub color: String,
    pub general_user_id: Option<i32>,
}

impl Faction {
    /// Listing order: by type precedence, then by name
    pub fn listing_cmp(&self, other: &Faction) -> Ordering {
        self.kind
            .listing_cmp(other.kind)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Faction together with its general's username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionWithGeneral {
    pub faction: Faction,
    pub general_name: Option<String>,
}
