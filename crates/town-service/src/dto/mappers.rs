//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use town_core::{
    CommentWithAuthor, FactionWithGeneral, ForumComment, ForumPost, PostWithAuthor, Role,
    RoleBadge, User, UserListing, UserProfile,
};

use super::responses::{
    CommentResponse, FactionResponse, PostResponse, ProfileResponse, ProfileUserResponse,
    RegisteredUserResponse, RoleBadgeResponse, RoleResponse, SessionUserResponse,
    UserListingResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for RegisteredUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            status: user.status.clone(),
            rank_level: user.rank_level,
        }
    }
}

impl From<&User> for SessionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            admin_role: user.admin_role.clone(),
            status: user.status.clone(),
            rank_level: user.rank_level,
            faction_id: user.faction_id,
            avatar_url: user.avatar_url.clone(),
            custom_status: user.custom_status.clone(),
            is_banned: user.is_banned,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            admin_role: user.admin_role,
            status: user.status,
            rank_level: user.rank_level,
            experience: user.experience,
            is_banned: user.is_banned,
            is_muted: user.is_muted,
            faction_id: user.faction_id,
            avatar_url: user.avatar_url,
            custom_status: user.custom_status,
            discord_link: user.discord_link,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<RoleBadge> for RoleBadgeResponse {
    fn from(badge: RoleBadge) -> Self {
        Self {
            name: badge.name,
            color: badge.color,
        }
    }
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let user = profile.user;
        Self {
            user: ProfileUserResponse {
                id: user.id,
                username: user.username,
                admin_role: user.admin_role,
                status: user.status,
                custom_status: user.custom_status,
                rank_level: user.rank_level,
                experience: user.experience,
                avatar_url: user.avatar_url,
                discord_link: user.discord_link,
                faction_name: profile.faction_name,
                faction_color: profile.faction_color,
            },
            roles: profile.roles.into_iter().map(RoleBadgeResponse::from).collect(),
        }
    }
}

impl From<UserListing> for UserListingResponse {
    fn from(listing: UserListing) -> Self {
        Self {
            id: listing.id,
            username: listing.username,
            admin_role: listing.admin_role,
            status: listing.status,
            rank_level: listing.rank_level,
            is_banned: listing.is_banned,
            is_muted: listing.is_muted,
            faction_name: listing.faction_name,
        }
    }
}

// ============================================================================
// Role and Faction Mappers
// ============================================================================

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            color: role.color,
            is_custom: role.is_custom,
            created_by_admin_id: role.created_by_admin_id,
            created_at: role.created_at,
        }
    }
}

impl From<FactionWithGeneral> for FactionResponse {
    fn from(entry: FactionWithGeneral) -> Self {
        let faction = entry.faction;
        Self {
            id: faction.id,
            name: faction.name,
            description: faction.description,
            faction_type: faction.kind,
            color: faction.color,
            general_user_id: faction.general_user_id,
            general_name: entry.general_name,
        }
    }
}

// ============================================================================
// Forum Mappers
// ============================================================================

impl From<ForumPost> for PostResponse {
    fn from(post: ForumPost) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            category: post.category,
            likes: post.likes,
            created_at: post.created_at,
            username: None,
            avatar_url: None,
            admin_role: None,
        }
    }
}

impl From<PostWithAuthor> for PostResponse {
    fn from(entry: PostWithAuthor) -> Self {
        Self {
            username: Some(entry.author.username),
            avatar_url: entry.author.avatar_url,
            admin_role: entry.author.admin_role,
            ..Self::from(entry.post)
        }
    }
}

impl From<ForumComment> for CommentResponse {
    fn from(comment: ForumComment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
            username: None,
            avatar_url: None,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        Self {
            username: Some(entry.author.username),
            avatar_url: entry.author.avatar_url,
            ..Self::from(entry.comment)
        }
    }
}
