//! Role entity - a named badge that admins hand out to users

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Color given to custom roles created without one
pub const DEFAULT_ROLE_COLOR: &str = "#FFFFFF";

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub color: String,
    /// `false` for roles seeded with the platform, `true` for admin-created ones
    pub is_custom: bool,
    pub created_by_admin_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Check if this is a built-in role
    #[inline]
    pub fn is_builtin(&self) -> bool {
        !self.is_custom
    }

    /// Listing order: built-in before custom, then by name
    pub fn listing_cmp(&self, other: &Role) -> Ordering {
        self.is_custom
            .cmp(&other.is_custom)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Values for a new custom role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_by_admin_id: i32,
}

/// Role name and color as shown on a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBadge {
    pub name: String,
    pub color: String,
}

impl From<&Role> for RoleBadge {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            color: role.color.clone(),
        }
    }
}
