//! In-memory repositories for unit tests
//!
//! Available to other crates through the `testing` feature.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};

use town_common::{hash_password, AdminConfig};
use town_core::{
    AdminCode, AdminCodeRepository, Author, CommentRepository, CommentWithAuthor, DomainError,
    Faction, FactionRepository, FactionType, FactionWithGeneral, ForumComment, ForumPost,
    NewComment, NewPost, NewRole, PostRepository, PostWithAuthor, ProfilePatch, RepoResult, Role,
    RoleBadge, RoleRepository, User, UserListing, UserProfile, UserRepository,
    DEFAULT_ROLE_COLOR,
};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    roles: Vec<Role>,
    memberships: BTreeSet<(i32, i32)>,
    factions: Vec<Faction>,
    codes: Vec<AdminCode>,
    posts: Vec<ForumPost>,
    comments: Vec<ForumComment>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn user_mut(&mut self, id: i32) -> RepoResult<&mut User> {
        self.users
            .iter_mut()
            .map(|(u, _)| u)
            .find(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))
    }

    fn author(&self, user_id: i32) -> Author {
        let user = self.users.iter().map(|(u, _)| u).find(|u| u.id == user_id);
        Author {
            username: user.map(|u| u.username.clone()).unwrap_or_default(),
            avatar_url: user.and_then(|u| u.avatar_url.clone()),
            admin_role: user.and_then(|u| u.admin_role.clone()),
        }
    }
}

/// Single store backing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(u, h)| u.username == username && h == password_hash)
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        let mut state = self.lock();
        if state.users.iter().any(|(u, _)| u.username == username) {
            return Err(DomainError::UsernameTaken);
        }
        let mut user = User::new(state.next_id(), username.to_string());
        // Distinct timestamps keep "newest first" orderings deterministic
        user.created_at += Duration::milliseconds(i64::from(user.id));
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(user)
    }

    async fn find_profile(&self, id: i32) -> RepoResult<Option<UserProfile>> {
        let state = self.lock();
        let Some((user, _)) = state.users.iter().find(|(u, _)| u.id == id) else {
            return Ok(None);
        };
        let faction = user
            .faction_id
            .and_then(|fid| state.factions.iter().find(|f| f.id == fid));
        let roles = state
            .roles
            .iter()
            .filter(|r| state.memberships.contains(&(id, r.id)))
            .map(RoleBadge::from)
            .collect();

        Ok(Some(UserProfile {
            user: user.clone(),
            faction_name: faction.map(|f| f.name.clone()),
            faction_color: faction.map(|f| f.color.clone()),
            roles,
        }))
    }

    async fn update_profile(&self, id: i32, patch: &ProfilePatch) -> RepoResult<User> {
        let mut state = self.lock();
        let user = state.user_mut(id)?;
        user.apply_patch(patch);
        Ok(user.clone())
    }

    async fn list_with_factions(&self) -> RepoResult<Vec<UserListing>> {
        let state = self.lock();
        let mut listing: Vec<_> = state
            .users
            .iter()
            .map(|(u, _)| UserListing {
                id: u.id,
                username: u.username.clone(),
                admin_role: u.admin_role.clone(),
                status: u.status.clone(),
                rank_level: u.rank_level,
                is_banned: u.is_banned,
                is_muted: u.is_muted,
                faction_name: u
                    .faction_id
                    .and_then(|fid| state.factions.iter().find(|f| f.id == fid))
                    .map(|f| f.name.clone()),
                created_at: u.created_at,
            })
            .collect();
        listing.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listing)
    }

    async fn set_banned(&self, id: i32) -> RepoResult<()> {
        self.lock().user_mut(id)?.is_banned = true;
        Ok(())
    }

    async fn set_muted(&self, id: i32) -> RepoResult<()> {
        self.lock().user_mut(id)?.is_muted = true;
        Ok(())
    }

    async fn update_status(&self, id: i32, status: &str) -> RepoResult<()> {
        self.lock().user_mut(id)?.status = status.to_string();
        Ok(())
    }

    async fn assign_faction(&self, id: i32, faction_id: Option<i32>) -> RepoResult<()> {
        let mut state = self.lock();
        if let Some(fid) = faction_id {
            if !state.factions.iter().any(|f| f.id == fid) {
                return Err(DomainError::FactionNotFound(fid));
            }
        }
        state.user_mut(id)?.faction_id = faction_id;
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<Role>> {
        Ok(self.lock().roles.clone())
    }

    async fn create(&self, role: &NewRole) -> RepoResult<Role> {
        let mut state = self.lock();
        let role = Role {
            id: state.next_id(),
            name: role.name.clone(),
            description: role.description.clone(),
            color: role.color.clone(),
            is_custom: true,
            created_by_admin_id: Some(role.created_by_admin_id),
            created_at: Utc::now(),
        };
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn assign_to_user(&self, user_id: i32, role_id: i32) -> RepoResult<bool> {
        let mut state = self.lock();
        if !state.users.iter().any(|(u, _)| u.id == user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }
        if !state.roles.iter().any(|r| r.id == role_id) {
            return Err(DomainError::RoleNotFound(role_id));
        }
        Ok(state.memberships.insert((user_id, role_id)))
    }
}

#[async_trait]
impl FactionRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Faction>> {
        Ok(self.lock().factions.iter().find(|f| f.id == id).cloned())
    }

    async fn list_with_generals(&self) -> RepoResult<Vec<FactionWithGeneral>> {
        let state = self.lock();
        Ok(state
            .factions
            .iter()
            .map(|f| FactionWithGeneral {
                faction: f.clone(),
                general_name: f.general_user_id.map(|id| state.author(id).username),
            })
            .collect())
    }
}

#[async_trait]
impl AdminCodeRepository for MemoryStore {
    async fn find_valid(&self, code: &str, today: NaiveDate) -> RepoResult<Option<AdminCode>> {
        Ok(self
            .lock()
            .codes
            .iter()
            .find(|c| c.code == code && c.is_valid_on(today))
            .cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<PostWithAuthor>> {
        let state = self.lock();
        Ok(state
            .posts
            .iter()
            .rev()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .map(|p| PostWithAuthor {
                post: p.clone(),
                author: state.author(p.user_id),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<ForumPost>> {
        Ok(self.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: &NewPost) -> RepoResult<ForumPost> {
        let mut state = self.lock();
        let post = ForumPost {
            id: state.next_id(),
            user_id: post.user_id,
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category.clone(),
            likes: 0,
            created_at: Utc::now(),
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn increment_likes(&self, id: i32) -> RepoResult<i32> {
        let mut state = self.lock();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.likes += 1;
        Ok(post.likes)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_post(&self, post_id: i32) -> RepoResult<Vec<CommentWithAuthor>> {
        let state = self.lock();
        Ok(state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| CommentWithAuthor {
                comment: c.clone(),
                author: state.author(c.user_id),
            })
            .collect())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<ForumComment> {
        let mut state = self.lock();
        if !state.posts.iter().any(|p| p.id == comment.post_id) {
            return Err(DomainError::PostNotFound(comment.post_id));
        }
        let comment = ForumComment {
            id: state.next_id(),
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content.clone(),
            created_at: Utc::now(),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }
}

/// Service context over a fresh in-memory store, plus seeding helpers
pub struct Fixture {
    pub ctx: ServiceContext,
    store: Arc<MemoryStore>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let ctx = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .role_repo(store.clone())
            .faction_repo(store.clone())
            .admin_code_repo(store.clone())
            .post_repo(store.clone())
            .comment_repo(store.clone())
            .admin_config(AdminConfig::default())
            .build()
            .unwrap();
        Self { ctx, store }
    }

    pub fn add_user(&self, username: &str) -> User {
        let mut state = self.store.lock();
        let user = User::new(state.next_id(), username.to_string());
        state.users.push((user.clone(), hash_password("password")));
        user
    }

    pub fn add_admin(&self, username: &str, admin_role: &str) -> User {
        let mut state = self.store.lock();
        let mut user = User::new(state.next_id(), username.to_string());
        user.admin_role = Some(admin_role.to_string());
        state.users.push((user.clone(), hash_password("password")));
        user
    }

    pub fn add_code(&self, code: &str, valid_date: NaiveDate) {
        self.store.lock().codes.push(AdminCode {
            code: code.to_string(),
            valid_date,
        });
    }

    pub fn add_role(&self, name: &str, is_custom: bool) -> Role {
        let mut state = self.store.lock();
        let role = Role {
            id: state.next_id(),
            name: name.to_string(),
            description: String::new(),
            color: DEFAULT_ROLE_COLOR.to_string(),
            is_custom,
            created_by_admin_id: None,
            created_at: Utc::now(),
        };
        state.roles.push(role.clone());
        role
    }

    pub fn add_faction(&self, name: &str, kind: FactionType) -> Faction {
        let mut state = self.store.lock();
        let faction = Faction {
            id: state.next_id(),
            name: name.to_string(),
            description: None,
            kind,
            color: "#000000".to_string(),
            general_user_id: None,
        };
        state.factions.push(faction.clone());
        faction
    }

    pub fn ban(&self, user_id: i32) {
        if let Ok(user) = self.store.lock().user_mut(user_id) {
            user.is_banned = true;
        }
    }

    pub fn user(&self, user_id: i32) -> Option<User> {
        self.store
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone())
    }

    pub fn user_count(&self) -> usize {
        self.store.lock().users.len()
    }

    pub fn memberships(&self, user_id: i32) -> Vec<i32> {
        self.store
            .lock()
            .memberships
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, r)| *r)
            .collect()
    }

    pub fn comment_count(&self) -> usize {
        self.store.lock().comments.len()
    }
}
