//! Role entity <- model mapper

use town_core::{Role, RoleBadge, DEFAULT_ROLE_COLOR};

use crate::models::{RoleBadgeModel, RoleModel};

/// Convert RoleModel to Role entity
impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
            description: model.description.unwrap_or_default(),
            color: model
                .color
                .unwrap_or_else(|| DEFAULT_ROLE_COLOR.to_string()),
            is_custom: model.is_custom,
            created_by_admin_id: model.created_by_admin_id,
            created_at: model.created_at,
        }
    }
}

/// Convert RoleBadgeModel to RoleBadge
impl From<RoleBadgeModel> for RoleBadge {
    fn from(model: RoleBadgeModel) -> Self {
        RoleBadge {
            name: model.name,
            color: model
                .color
                .unwrap_or_else(|| DEFAULT_ROLE_COLOR.to_string()),
        }
    }
}
