//! Post service
//!
//! Handles menu item reviews: listing, creation with photo and 3D model uploads,
//! partial updates and deletion.

use chrono::Utc;
use gourmet_core::entities::{Post, PostChanges};
use gourmet_core::{DomainError, PageQuery, Score, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreatePostRequest, MediaKind, PostResponse, UpdatePostRequest, UploadedFile};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::media::{remove_quietly, StagedMedia};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List posts ordered by id
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<Vec<PostResponse>> {
        let presenter = self.ctx.presenter();
        let posts = self.ctx.post_repo().list(page).await?;
        Ok(posts.iter().map(|p| presenter.post(p)).collect())
    }

    /// Get a post by ID
    #[instrument(skip(self))]
    pub async fn get(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self.find(post_id).await?;
        Ok(self.ctx.presenter().post(&post))
    }

    /// Create a post authored by the caller
    ///
    /// Both files are stored before the row is inserted and are removed again if
    /// the insert fails.
    #[instrument(skip(self, request), fields(author_id = %actor.id))]
    pub async fn create(&self, actor: Actor, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        request.validate()?;
        let CreatePostRequest {
            restaurant_name,
            location,
            menu_item,
            menu_item_photo: photo,
            menu_item_model: model,
            price,
            score,
            review_text,
            category,
        } = request;

        let score = Score::new(score)?;
        let category = self.checked_categories(category).await?;

        let id = self.ctx.generate_id();
        let max_bytes = self.ctx.max_upload_bytes();
        let photo_ext = photo.checked_extension(MediaKind::Image, max_bytes)?;
        let model_ext = model.checked_extension(MediaKind::Model, max_bytes)?;

        let mut staged = StagedMedia::new(self.ctx.media_store());
        let result = async {
            let menu_item_photo = staged
                .save(&Post::photo_path(id, &photo_ext), &photo.bytes)
                .await?;
            let menu_item_model = staged
                .save(&Post::model_path(id, &model_ext), &model.bytes)
                .await?;

            let post = Post {
                id,
                author_id: actor.id,
                restaurant_name,
                location,
                menu_item,
                menu_item_photo,
                menu_item_model,
                price,
                score,
                review_text,
                category,
                created_on: Utc::now(),
            };
            self.ctx.post_repo().create(&post).await?;
            ServiceResult::Ok(post)
        }
        .await;

        let post = match result {
            Ok(post) => post,
            Err(e) => {
                staged.rollback().await;
                return Err(e);
            }
        };
        staged.commit().await;

        info!(post_id = %post.id, "Post created");
        Ok(self.ctx.presenter().post(&post))
    }

    /// Update a post
    ///
    /// Omitted fields keep their current value. A new category list replaces the
    /// current one.
    #[instrument(skip(self, request), fields(user_id = %actor.id))]
    pub async fn update(
        &self,
        actor: Actor,
        post_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        let mut post = self.find(post_id).await?;
        actor.ensure_can_modify(post.author_id)?;

        let UpdatePostRequest {
            restaurant_name,
            location,
            menu_item,
            menu_item_photo: photo,
            menu_item_model: model,
            price,
            score,
            review_text,
            category,
        } = request;

        let score = score.map(Score::new).transpose()?;
        let category = match category {
            Some(ids) => Some(self.checked_categories(ids).await?),
            None => None,
        };
        let max_bytes = self.ctx.max_upload_bytes();
        let photo = checked_optional(photo, MediaKind::Image, max_bytes)?;
        let model = checked_optional(model, MediaKind::Model, max_bytes)?;

        let mut staged = StagedMedia::new(self.ctx.media_store());
        let result = async {
            let mut changes = PostChanges {
                restaurant_name,
                location,
                menu_item,
                price,
                score,
                review_text,
                category,
                ..PostChanges::default()
            };

            if let Some((file, ext)) = &photo {
                let path = Post::photo_path(post.id, ext);
                let current = post.menu_item_photo.as_str();
                changes.menu_item_photo = Some(staged.replace(Some(current), &path, &file.bytes).await?);
            }
            if let Some((file, ext)) = &model {
                let path = Post::model_path(post.id, ext);
                let current = post.menu_item_model.as_str();
                changes.menu_item_model = Some(staged.replace(Some(current), &path, &file.bytes).await?);
            }

            post.apply(changes);
            self.ctx.post_repo().update(&post).await?;
            ServiceResult::Ok(())
        }
        .await;

        if let Err(e) = result {
            staged.rollback().await;
            return Err(e);
        }
        staged.commit().await;

        Ok(self.ctx.presenter().post(&post))
    }

    /// Delete a post and its media files
    #[instrument(skip(self), fields(user_id = %actor.id))]
    pub async fn delete(&self, actor: Actor, post_id: Snowflake) -> ServiceResult<()> {
        let post = self.find(post_id).await?;
        actor.ensure_can_modify(post.author_id)?;

        self.ctx.post_repo().delete(post_id).await?;
        for path in [&post.menu_item_photo, &post.menu_item_model] {
            remove_quietly(self.ctx.media_store(), path).await;
        }

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    async fn find(&self, post_id: Snowflake) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?)
    }

    /// Normalize category ids and reject unknown ones
    async fn checked_categories(&self, ids: Vec<Snowflake>) -> ServiceResult<Vec<Snowflake>> {
        let ids = Post::normalize_categories(ids);
        if ids.is_empty() {
            return Ok(ids);
        }

        let missing = self.ctx.category_repo().find_missing(&ids).await?;
        match missing.first() {
            Some(&id) => Err(DomainError::UnknownCategory(id).into()),
            None => Ok(ids),
        }
    }
}

/// Check an optional upload, pairing it with its extension
fn checked_optional(
    file: Option<UploadedFile>,
    kind: MediaKind,
    max_bytes: usize,
) -> ServiceResult<Option<(UploadedFile, String)>> {
    match file {
        Some(file) => {
            let ext = file.checked_extension(kind, max_bytes)?;
            Ok(Some((file, ext)))
        }
        None => Ok(None),
    }
}
