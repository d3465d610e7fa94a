//! Profile service
//!
//! Handles profile listing, creation, update and deletion, including avatar uploads.

use gourmet_core::entities::Profile;
use gourmet_core::{DomainError, PageQuery, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateProfileRequest, MediaKind, ProfileResponse, UpdateProfileRequest, UploadedFile};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::media::{remove_quietly, StagedMedia};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all profiles
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageQuery) -> ServiceResult<Vec<ProfileResponse>> {
        let presenter = self.ctx.presenter();
        let profiles = self.ctx.profile_repo().list(page).await?;
        Ok(profiles.iter().map(|p| presenter.profile(p)).collect())
    }

    /// Profiles owned by the caller
    #[instrument(skip(self))]
    pub async fn my_profiles(&self, actor: Actor) -> ServiceResult<Vec<ProfileResponse>> {
        let presenter = self.ctx.presenter();
        let profile = self.ctx.profile_repo().find_by_user(actor.id).await?;
        Ok(profile.iter().map(|p| presenter.profile(p)).collect())
    }

    /// Get a profile by ID
    #[instrument(skip(self))]
    pub async fn get(&self, profile_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let profile = self.find(profile_id).await?;
        Ok(self.ctx.presenter().profile(&profile))
    }

    /// Create the caller's profile
    ///
    /// The profile always belongs to the caller.
    #[instrument(skip(self, request), fields(user_id = %actor.id))]
    pub async fn create(&self, actor: Actor, request: CreateProfileRequest) -> ServiceResult<ProfileResponse> {
        request.validate()?;
        let CreateProfileRequest { nick_name, img } = request;

        if self.ctx.profile_repo().find_by_user(actor.id).await?.is_some() {
            return Err(DomainError::ProfileAlreadyExists.into());
        }

        let mut profile = Profile::new(self.ctx.generate_id(), actor.id, nick_name);
        let mut staged = StagedMedia::new(self.ctx.media_store());

        let result = async {
            if let Some(img) = &img {
                let path = self.avatar_path(&profile, img)?;
                profile.img = Some(staged.save(&path, &img.bytes).await?);
            }
            self.ctx.profile_repo().create(&profile).await?;
            ServiceResult::Ok(())
        }
        .await;

        if let Err(e) = result {
            staged.rollback().await;
            return Err(e);
        }
        staged.commit().await;

        info!(profile_id = %profile.id, "Profile created");
        Ok(self.ctx.presenter().profile(&profile))
    }

    /// Update a profile
    ///
    /// Omitted fields keep their current value, including the avatar.
    #[instrument(skip(self, request), fields(user_id = %actor.id))]
    pub async fn update(
        &self,
        actor: Actor,
        profile_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;
        let UpdateProfileRequest { nick_name, img } = request;

        let mut profile = self.find(profile_id).await?;
        actor.ensure_can_modify(profile.user_id)?;

        if let Some(nick_name) = nick_name {
            profile.nick_name = nick_name;
        }

        let mut staged = StagedMedia::new(self.ctx.media_store());
        let result = async {
            if let Some(img) = &img {
                let path = self.avatar_path(&profile, img)?;
                let stored = staged.replace(profile.img.as_deref(), &path, &img.bytes).await?;
                profile.img = Some(stored);
            }
            self.ctx.profile_repo().update(&profile).await?;
            ServiceResult::Ok(())
        }
        .await;

        if let Err(e) = result {
            staged.rollback().await;
            return Err(e);
        }
        staged.commit().await;

        Ok(self.ctx.presenter().profile(&profile))
    }

    /// Delete a profile and its avatar
    #[instrument(skip(self), fields(user_id = %actor.id))]
    pub async fn delete(&self, actor: Actor, profile_id: Snowflake) -> ServiceResult<()> {
        let profile = self.find(profile_id).await?;
        actor.ensure_can_modify(profile.user_id)?;

        self.ctx.profile_repo().delete(profile_id).await?;
        if let Some(img) = &profile.img {
            remove_quietly(self.ctx.media_store(), img).await;
        }

        info!(profile_id = %profile_id, "Profile deleted");
        Ok(())
    }

    async fn find(&self, profile_id: Snowflake) -> ServiceResult<Profile> {
        Ok(self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(profile_id))?)
    }

    fn avatar_path(&self, profile: &Profile, img: &UploadedFile) -> ServiceResult<String> {
        let ext = img.checked_extension(MediaKind::Image, self.ctx.max_upload_bytes())?;
        Ok(Profile::avatar_path(profile.user_id, &profile.nick_name, &ext))
    }
}
