//! User entity - a registered town resident

use chrono::{DateTime, Utc};

use super::role::RoleBadge;

/// User entity (the password hash never leaves the data layer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Admin tag such as "Модератор"; `None` for regular players
    pub admin_role: Option<String>,
    pub status: String,
    pub rank_level: i32,
    pub experience: i32,
    pub is_banned: bool,
    pub is_muted: bool,
    pub faction_id: Option<i32>,
    pub avatar_url: Option<String>,
    pub custom_status: Option<String>,
    pub discord_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Default status text for new users ("Player")
    pub const DEFAULT_STATUS: &'static str = "Игрок";

    /// Default rank for new users
    pub const DEFAULT_RANK: i32 = 1;

    /// Create a new User with store defaults
    pub fn new(id: i32, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            admin_role: None,
            status: Self::DEFAULT_STATUS.to_string(),
            rank_level: Self::DEFAULT_RANK,
            experience: 0,
            is_banned: false,
            is_muted: false,
            faction_id: None,
            avatar_url: None,
            custom_status: None,
            discord_link: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the user carries an admin role tag
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.admin_role.is_some()
    }

    /// Check if this user is the distinguished super-admin
    #[inline]
    pub fn is_super_admin(&self, super_admin_username: &str) -> bool {
        self.is_admin() && self.username == super_admin_username
    }

    /// Whether the account may log in
    #[inline]
    pub fn can_log_in(&self) -> bool {
        !self.is_banned
    }

    /// Apply a profile patch in memory
    pub fn apply_patch(&mut self, patch: &ProfilePatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(status) = &patch.custom_status {
            self.custom_status = Some(status.clone());
        }
        if let Some(url) = &patch.avatar_url {
            self.avatar_url = Some(url.clone());
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of the self-editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub custom_status: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfilePatch {
    /// True when the patch would not change anything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.custom_status.is_none() && self.avatar_url.is_none()
    }
}

/// Row of the admin user listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListing {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: String,
    pub rank_level: i32,
    pub is_banned: bool,
    pub is_muted: bool,
    pub faction_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public profile: user joined with faction and roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: User,
    pub faction_name: Option<String>,
    pub faction_color: Option<String>,
    pub roles: Vec<RoleBadge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(1, "alice".to_string());
        assert_eq!(user.status, "Игрок");
        assert_eq!(user.rank_level, 1);
        assert!(!user.is_admin());
        assert!(user.can_log_in());
    }

    #[test]
    fn test_super_admin_requires_admin_role() {
        let mut user = User::new(1, "TOURIST_WAGNERA".to_string());
        assert!(!user.is_super_admin("TOURIST_WAGNERA"));

        user.admin_role = Some("Владелец".to_string());
        assert!(user.is_super_admin("TOURIST_WAGNERA"));
        assert!(!user.is_super_admin("someone_else"));
    }

    #[test]
    fn test_banned_user_cannot_log_in() {
        let mut user = User::new(1, "bob".to_string());
        user.is_banned = true;
        assert!(!user.can_log_in());
    }

    #[test]
    fn test_apply_patch_only_touches_supplied_fields() {
        let mut user = User::new(1, "carol".to_string());
        user.avatar_url = Some("old.png".to_string());

        user.apply_patch(&ProfilePatch {
            custom_status: Some("на смене".to_string()),
            avatar_url: None,
        });

        assert_eq!(user.custom_status.as_deref(), Some("на смене"));
        assert_eq!(user.avatar_url.as_deref(), Some("old.png"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut user = User::new(1, "dave".to_string());
        let before = user.clone();
        let patch = ProfilePatch::default();
        assert!(patch.is_empty());

        user.apply_patch(&patch);
        assert_eq!(user, before);
    }
}
