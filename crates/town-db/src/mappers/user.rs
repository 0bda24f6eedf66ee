//! User entity <- model mapper

use town_core::{RoleBadge, User, UserListing, UserProfile};

use crate::models::{UserListingModel, UserModel, UserProfileModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            admin_role: model.admin_role,
            status: model
                .status
                .unwrap_or_else(|| User::DEFAULT_STATUS.to_string()),
            rank_level: model.rank_level.unwrap_or(User::DEFAULT_RANK),
            experience: model.experience.unwrap_or(0),
            is_banned: model.is_banned.unwrap_or(false),
            is_muted: model.is_muted.unwrap_or(false),
            faction_id: model.faction_id,
            avatar_url: model.avatar_url,
            custom_status: model.custom_status,
            discord_link: model.discord_link,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert UserListingModel to UserListing
impl From<UserListingModel> for UserListing {
    fn from(model: UserListingModel) -> Self {
        UserListing {
            id: model.id,
            username: model.username,
            admin_role: model.admin_role,
            status: model
                .status
                .unwrap_or_else(|| User::DEFAULT_STATUS.to_string()),
            rank_level: model.rank_level.unwrap_or(User::DEFAULT_RANK),
            is_banned: model.is_banned.unwrap_or(false),
            is_muted: model.is_muted.unwrap_or(false),
            faction_name: model.faction_name,
            created_at: model.created_at,
        }
    }
}

/// Assemble a profile from the joined user row and the user's role badges
pub fn profile_from_parts(model: UserProfileModel, roles: Vec<RoleBadge>) -> UserProfile {
    UserProfile {
        user: User::from(model.user),
        faction_name: model.faction_name,
        faction_color: model.faction_color,
        roles,
    }
}
