//! User service
//!
//! Handles account registration, account factories and active-user lookup.

use gourmet_common::auth::{validate_password, PasswordService};
use gourmet_common::AppError;
use gourmet_core::entities::User;
use gourmet_core::{DomainError, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{RegisterRequest, RegisterResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account from the public sign-up form
    ///
    /// Applies the password policy, unlike [`Self::create_user`].
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request.validate()?;

        let user = User::new(self.ctx.generate_id(), &request.email)?;
        validate_password(&request.password, &user.email)?;

        let user = self.insert(user, Some(&request.password)).await?;
        info!(user_id = %user.id, "User registered");

        Ok(RegisterResponse::from(&user))
    }

    /// Create a regular user
    ///
    /// Without a password the account gets an unusable hash and cannot log in.
    #[instrument(skip(self, password))]
    pub async fn create_user(&self, email: &str, password: Option<&str>) -> ServiceResult<User> {
        let user = User::new(self.ctx.generate_id(), email)?;
        self.insert(user, password).await
    }

    /// Create a user with the staff and superuser flags set
    #[instrument(skip(self, password))]
    pub async fn create_superuser(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = User::new_superuser(self.ctx.generate_id(), email)?;
        let user = self.insert(user, Some(password)).await?;
        info!(user_id = %user.id, "Superuser created");
        Ok(user)
    }

    /// Load the user behind a token
    ///
    /// A deleted account makes the token invalid; a deactivated one is rejected.
    #[instrument(skip(self))]
    pub async fn get_active_user(&self, user_id: Snowflake) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.is_active {
            return Err(AppError::InactiveAccount.into());
        }

        Ok(user)
    }

    async fn insert(&self, user: User, password: Option<&str>) -> ServiceResult<User> {
        if self.ctx.user_repo().email_exists(&user.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = PasswordService::new().hash_optional(password)?;
        self.ctx.user_repo().create(&user, &password_hash).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use crate::testing::TestContext;
    use gourmet_common::auth::is_usable_password;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_requires_email() {
        let test = TestContext::new();
        let service = UserService::new(&test.ctx);

        let err = service.create_user("", Some("pw")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::EmailRequired)));

        let err = service
            .register(register_request("", "a-good-passphrase"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "EMAIL_REQUIRED");
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let test = TestContext::new();
        let user = UserService::new(&test.ctx)
            .create_user("normal@user.com", Some("foo"))
            .await
            .unwrap();

        let hash = test.users.password_hash(user.id).unwrap();
        assert_ne!(hash, "foo");
        assert!(hash.starts_with("$argon2"));
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_create_user_without_password_is_unusable() {
        let test = TestContext::new();
        let user = UserService::new(&test.ctx)
            .create_user("nopass@user.com", None)
            .await
            .unwrap();

        let hash = test.users.password_hash(user.id).unwrap();
        assert!(!is_usable_password(&hash));
    }

    #[tokio::test]
    async fn test_create_superuser_sets_flags() {
        let test = TestContext::new();
        let admin = UserService::new(&test.ctx)
            .create_superuser("super@user.com", "foo")
            .await
            .unwrap();

        assert!(admin.is_active);
        assert!(admin.is_staff);
        assert!(admin.is_superuser);
    }

    #[tokio::test]
    async fn test_register_normalizes_domain_only() {
        let test = TestContext::new();
        let response = UserService::new(&test.ctx)
            .register(register_request("  Hanako@EXAMPLE.Com ", "umami-broth-2024"))
            .await
            .unwrap();

        assert_eq!(response.email, "Hanako@example.com");
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password() {
        let test = TestContext::new();
        let err = UserService::new(&test.ctx)
            .register(register_request("taro@example.com", "12345678"))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "WEAK_PASSWORD");
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let test = TestContext::new();
        let service = UserService::new(&test.ctx);
        service
            .register(register_request("taro@example.com", "umami-broth-2024"))
            .await
            .unwrap();

        let err = service
            .register(register_request("taro@EXAMPLE.com", "umami-broth-2024"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "EMAIL_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn test_get_active_user() {
        let test = TestContext::new();
        let service = UserService::new(&test.ctx);
        let user = service.create_user("active@example.com", Some("pw")).await.unwrap();
        assert_eq!(service.get_active_user(user.id).await.unwrap().id, user.id);

        test.users.deactivate(user.id);
        let err = service.get_active_user(user.id).await.unwrap_err();
        assert_eq!(err.error_code(), "USER_INACTIVE");

        let err = service.get_active_user(Snowflake::new(404)).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_TOKEN");
    }
}
