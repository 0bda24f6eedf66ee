//! Action routing
//!
//! Each subsystem maps `(HTTP method, action)` onto its own closed set of
//! operations. A pair that is not listed routes nowhere.

/// Identity subsystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAction {
    Register,
    Login,
    Profile,
    UpdateProfile,
}

impl IdentityAction {
    /// Route a method/action pair
    pub fn route(method: &str, action: &str) -> Option<Self> {
        match (method, action) {
            ("POST", "register") => Some(Self::Register),
            ("POST", "login") => Some(Self::Login),
            ("GET", "profile") => Some(Self::Profile),
            ("PUT", "update-profile") => Some(Self::UpdateProfile),
            _ => None,
        }
    }
}

/// Administration subsystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    ListUsers,
    Ban,
    Mute,
    CreateRole,
    AssignRole,
    ListRoles,
    ListFactions,
    UpdateStatus,
    AssignFaction,
}

impl AdminAction {
    /// Route a method/action pair
    pub fn route(method: &str, action: &str) -> Option<Self> {
        match (method, action) {
            ("GET", "users") => Some(Self::ListUsers),
            ("POST", "ban") => Some(Self::Ban),
            ("POST", "mute") => Some(Self::Mute),
            ("POST", "create-role") => Some(Self::CreateRole),
            ("POST", "assign-role") => Some(Self::AssignRole),
            ("GET", "roles") => Some(Self::ListRoles),
            ("GET", "factions") => Some(Self::ListFactions),
            ("PUT", "update-status") => Some(Self::UpdateStatus),
            ("POST", "assign-faction") => Some(Self::AssignFaction),
            _ => None,
        }
    }
}

/// Forum subsystem operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForumAction {
    ListPosts,
    CreatePost,
    ListComments,
    AddComment,
    LikePost,
}

impl ForumAction {
    /// Route a method/action pair
    pub fn route(method: &str, action: &str) -> Option<Self> {
        match (method, action) {
            ("GET", "posts") => Some(Self::ListPosts),
            ("POST", "create-post") => Some(Self::CreatePost),
            ("GET", "comments") => Some(Self::ListComments),
            ("POST", "add-comment") => Some(Self::AddComment),
            ("POST", "like-post") => Some(Self::LikePost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_routes() {
        assert_eq!(IdentityAction::route("POST", "register"), Some(IdentityAction::Register));
        assert_eq!(
            IdentityAction::route("PUT", "update-profile"),
            Some(IdentityAction::UpdateProfile)
        );
        assert_eq!(IdentityAction::route("GET", "login"), None);
        assert_eq!(IdentityAction::route("POST", ""), None);
    }

    #[test]
    fn test_admin_routes() {
        assert_eq!(AdminAction::route("GET", "users"), Some(AdminAction::ListUsers));
        assert_eq!(AdminAction::route("PUT", "update-status"), Some(AdminAction::UpdateStatus));
        assert_eq!(AdminAction::route("DELETE", "ban"), None);
    }

    #[test]
    fn test_subsystems_do_not_share_actions() {
        assert_eq!(ForumAction::route("POST", "register"), None);
        assert_eq!(AdminAction::route("GET", "posts"), None);
        assert_eq!(IdentityAction::route("GET", "users"), None);
        assert_eq!(ForumAction::route("POST", "like-post"), Some(ForumAction::LikePost));
    }
}
