//! Token service
//!
//! Issues, refreshes and verifies JWT pairs for the `/authen/jwt/*` endpoints.

use chrono::Utc;
use gourmet_common::auth::{verify_password, TokenPair};
use gourmet_common::AppError;
use gourmet_core::entities::User;
use gourmet_core::normalize_email;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    TokenObtainRequest, TokenRefreshRequest, TokenRefreshResponse, TokenVerifyRequest,
    TokenVerifyResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Token service
pub struct TokenService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TokenService<'a> {
    /// Create a new TokenService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange email and password for a token pair
    ///
    /// Unknown emails, wrong passwords and inactive accounts all fail the same way.
    #[instrument(skip(self, request))]
    pub async fn obtain(&self, request: TokenObtainRequest) -> ServiceResult<TokenPair> {
        request.validate()?;

        let email = normalize_email(&request.email);
        let Some(user) = self.check_credentials(&email, &request.password).await? else {
            warn!(email = %email, "Rejected login attempt");
            return Err(AppError::InvalidCredentials.into());
        };

        self.ctx
            .user_repo()
            .update_last_login(user.id, Utc::now())
            .await?;

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        info!(user_id = %user.id, "Token pair issued");

        Ok(tokens)
    }

    /// Issue a new access token from a refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: TokenRefreshRequest) -> ServiceResult<TokenRefreshResponse> {
        request.validate()?;

        let claims = self.ctx.jwt_service().validate_refresh_token(&request.refresh)?;
        let user = UserService::new(self.ctx)
            .get_active_user(claims.user_id()?)
            .await?;

        Ok(TokenRefreshResponse {
            access: self.ctx.jwt_service().generate_access_token(user.id)?,
        })
    }

    /// Check that a token of either type is well formed and unexpired
    #[instrument(skip(self, request))]
    pub fn verify(&self, request: &TokenVerifyRequest) -> ServiceResult<TokenVerifyResponse> {
        request.validate()?;
        self.ctx.jwt_service().decode_token(&request.token)?;
        Ok(TokenVerifyResponse {})
    }

    /// Resolve an access token to its active user
    ///
    /// Refresh tokens are rejected.
    #[instrument(skip(self, token))]
    pub async fn authenticate_access(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        UserService::new(self.ctx)
            .get_active_user(claims.user_id()?)
            .await
    }

    async fn check_credentials(&self, email: &str, password: &str) -> ServiceResult<Option<User>> {
        let Some(user) = self.ctx.user_repo().find_by_email(email).await? else {
            return Ok(None);
        };
        if !user.is_active {
            return Ok(None);
        }

        let Some(hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            return Ok(None);
        };
        if !verify_password(password, &hash)? {
            return Ok(None);
        }

        Ok(Some(user))
    }
}
