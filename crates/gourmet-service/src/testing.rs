//! In-memory repository and media store fakes for service tests

use std::collections::BTreeMap;
use std::path::{Component, Path};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gourmet_common::auth::JwtService;
use gourmet_core::entities::{Category, Post, Profile, Restaurant, User};
use gourmet_core::traits::{
    CategoryRepository, MediaStore, PageQuery, PostRepository, ProfileRepository, RepoResult,
    RestaurantRepository, UserRepository,
};
use gourmet_core::{DomainError, Snowflake, SnowflakeGenerator};
use parking_lot::Mutex;

use crate::services::{ServiceContext, ServiceContextBuilder, UserService};

fn page<T: Clone>(rows: &BTreeMap<Snowflake, T>, query: PageQuery) -> Vec<T> {
    rows.iter()
        .filter(|(id, _)| query.after.map_or(true, |after| **id > after))
        .take(query.limit as usize)
        .map(|(_, row)| row.clone())
        .collect()
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<BTreeMap<Snowflake, (User, String)>>,
}

impl MemoryUserRepository {
    pub fn get(&self, id: Snowflake) -> Option<User> {
        self.rows.lock().get(&id).map(|(user, _)| user.clone())
    }

    pub fn password_hash(&self, id: Snowflake) -> Option<String> {
        self.rows.lock().get(&id).map(|(_, hash)| hash.clone())
    }

    pub fn deactivate(&self, id: Snowflake) {
        if let Some((user, _)) = self.rows.lock().get_mut(&id) {
            user.is_active = false;
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .values()
            .find(|(user, _)| user.email == email)
            .map(|(user, _)| user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        if rows.values().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        rows.insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.password_hash(id))
    }

    async fn update_last_login(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()> {
        match self.rows.lock().get_mut(&id) {
            Some((user, _)) => {
                user.record_login(at);
                Ok(())
            }
            None => Err(DomainError::UserNotFound(id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.rows
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Default)]
pub struct MemoryProfileRepository {
    rows: Mutex<BTreeMap<Snowflake, Profile>>,
}

impl MemoryProfileRepository {
    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>> {
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>> {
        Ok(self
            .rows
            .lock()
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn list(&self, query: PageQuery) -> RepoResult<Vec<Profile>> {
        Ok(page(&self.rows.lock(), query))
    }

    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        if rows.values().any(|p| p.user_id == profile.user_id) {
            return Err(DomainError::ProfileAlreadyExists);
        }
        rows.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        match self.rows.lock().get_mut(&profile.id) {
            Some(row) => {
                *row = profile.clone();
                Ok(())
            }
            None => Err(DomainError::ProfileNotFound(profile.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.rows
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ProfileNotFound(id))
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Default)]
pub struct MemoryPostRepository {
    rows: Mutex<BTreeMap<Snowflake, Post>>,
    fail_writes: AtomicBool,
}

impl MemoryPostRepository {
    /// Make every following create or update fail like a lost database
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn list(&self, query: PageQuery) -> RepoResult<Vec<Post>> {
        Ok(page(&self.rows.lock(), query))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.check_writable()?;
        self.rows.lock().insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        self.check_writable()?;
        match self.rows.lock().get_mut(&post.id) {
            Some(row) => {
                *row = post.clone();
                Ok(())
            }
            None => Err(DomainError::PostNotFound(post.id)),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.rows
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PostNotFound(id))
    }
}

// ============================================================================
// Restaurants & Categories
// ============================================================================

#[derive(Default)]
pub struct MemoryRestaurantRepository {
    rows: Mutex<BTreeMap<Snowflake, Restaurant>>,
}

#[async_trait]
impl RestaurantRepository for MemoryRestaurantRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Restaurant>> {
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn list(&self, query: PageQuery) -> RepoResult<Vec<Restaurant>> {
        Ok(page(&self.rows.lock(), query))
    }

    async fn create(&self, restaurant: &Restaurant) -> RepoResult<()> {
        self.rows.lock().insert(restaurant.id, restaurant.clone());
        Ok(())
    }

    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()> {
        self.rows.lock().insert(restaurant.id, restaurant.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.rows
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::RestaurantNotFound(id))
    }
}

#[derive(Default)]
pub struct MemoryCategoryRepository {
    rows: Mutex<BTreeMap<Snowflake, Category>>,
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>> {
        Ok(self.rows.lock().get(&id).cloned())
    }

    async fn list(&self, query: PageQuery) -> RepoResult<Vec<Category>> {
        Ok(page(&self.rows.lock(), query))
    }

    async fn find_missing(&self, ids: &[Snowflake]) -> RepoResult<Vec<Snowflake>> {
        let rows = self.rows.lock();
        Ok(ids.iter().copied().filter(|id| !rows.contains_key(id)).collect())
    }

    async fn create(&self, category: &Category) -> RepoResult<()> {
        self.rows.lock().insert(category.id, category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> RepoResult<()> {
        self.rows.lock().insert(category.id, category.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.rows
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CategoryNotFound(id))
    }
}

// ============================================================================
// Media
// ============================================================================

/// Media store keeping files in memory, served under `/media/`
#[derive(Default)]
pub struct MemoryMediaStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryMediaStore {
    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn save(&self, path: &str, content: &[u8]) -> RepoResult<String> {
        // Same rule as the disk store: plain relative components only
        let valid = !path.contains('\\')
            && Path::new(path)
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(DomainError::InvalidMediaPath(path.to_string()));
        }
        self.files.lock().insert(path.to_string(), content.to_vec());
        Ok(path.to_string())
    }

    async fn delete(&self, path: &str) -> RepoResult<()> {
        self.files
            .lock()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| DomainError::MediaNotFound(path.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("/media/{path}")
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

// ============================================================================
// Context
// ============================================================================

/// A service context wired to in-memory fakes, with handles to inspect them
pub struct TestContext {
    pub ctx: ServiceContext,
    pub users: Arc<MemoryUserRepository>,
    pub profiles: Arc<MemoryProfileRepository>,
    pub posts: Arc<MemoryPostRepository>,
    pub categories: Arc<MemoryCategoryRepository>,
    pub media: Arc<MemoryMediaStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::default());
        let profiles = Arc::new(MemoryProfileRepository::default());
        let posts = Arc::new(MemoryPostRepository::default());
        let categories = Arc::new(MemoryCategoryRepository::default());
        let media = Arc::new(MemoryMediaStore::default());

        let ctx = ServiceContextBuilder::new()
            .user_repo(users.clone())
            .profile_repo(profiles.clone())
            .post_repo(posts.clone())
            .restaurant_repo(Arc::new(MemoryRestaurantRepository::default()))
            .category_repo(categories.clone())
            .media_store(media.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600, 86400)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .time_zone(chrono_tz::UTC)
            .max_upload_bytes(1024 * 1024)
            .build()
            .expect("all dependencies are set");

        Self {
            ctx,
            users,
            profiles,
            posts,
            categories,
            media,
        }
    }

    /// Create an active user with a password
    pub async fn user(&self, email: &str, password: &str) -> User {
        UserService::new(&self.ctx)
            .create_user(email, Some(password))
            .await
            .expect("user is created")
    }

    /// Create a category and return its id
    pub async fn category(&self, name: &str) -> Snowflake {
        let category = Category::new(self.ctx.generate_id(), name.to_string());
        self.categories
            .create(&category)
            .await
            .expect("category is created");
        category.id
    }
}
