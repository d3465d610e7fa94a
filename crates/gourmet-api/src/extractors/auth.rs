//! Authentication extractor
//!
//! Extracts the access token from the Authorization header and loads the user
//! it belongs to. Both `JWT <token>` and `Bearer <token>` are accepted.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderValue},
};
use axum_extra::{
    headers::{
        authorization::{Bearer, Credentials},
        Authorization,
    },
    TypedHeader,
};
use gourmet_core::entities::User;
use gourmet_core::Snowflake;
use gourmet_service::{Actor, TokenService};

use crate::response::ApiError;
use crate::state::AppState;

/// Credentials sent as `Authorization: JWT <token>`
#[derive(Debug, Clone)]
pub struct JwtCredentials {
    token: String,
    raw: HeaderValue,
}

impl JwtCredentials {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Credentials for JwtCredentials {
    const SCHEME: &'static str = "JWT";

    fn decode(value: &HeaderValue) -> Option<Self> {
        let token = value.to_str().ok()?.get(Self::SCHEME.len()..)?.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            raw: value.clone(),
        })
    }

    fn encode(&self) -> HeaderValue {
        self.raw.clone()
    }
}

/// Authenticated user extracted from an access token
///
/// The user is reloaded on every request, so deleted and deactivated accounts
/// are rejected even while their tokens are unexpired.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn user_id(&self) -> Snowflake {
        self.user.id
    }

    /// Caller identity for ownership checks
    pub fn actor(&self) -> Actor {
        Actor::from(&self.user)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = access_token(parts, state).await?;

        // Get the app state to access the token service
        let app_state = AppState::from_ref(state);

        let user = TokenService::new(app_state.service_context())
            .authenticate_access(&token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected access token");
                ApiError::from(e)
            })?;

        Ok(AuthUser { user })
    }
}

async fn access_token<S>(parts: &mut Parts, state: &S) -> Result<String, ApiError>
where
    S: Send + Sync,
{
    if let Ok(TypedHeader(Authorization(jwt))) =
        TypedHeader::<Authorization<JwtCredentials>>::from_request_parts(parts, state).await
    {
        return Ok(jwt.token().to_string());
    }

    if let Ok(TypedHeader(Authorization(bearer))) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        return Ok(bearer.token().to_string());
    }

    if parts.headers.contains_key(header::AUTHORIZATION) {
        Err(ApiError::InvalidAuthFormat)
    } else {
        Err(ApiError::MissingAuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn token_from(value: Option<&str>) -> Result<String, ApiError> {
        let mut builder = Request::builder().uri("/api/post/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        access_token(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_jwt_scheme() {
        assert_eq!(token_from(Some("JWT abc.def.ghi")).await.unwrap(), "abc.def.ghi");
    }

    #[tokio::test]
    async fn test_bearer_scheme() {
        assert_eq!(token_from(Some("Bearer abc.def.ghi")).await.unwrap(), "abc.def.ghi");
    }

    #[tokio::test]
    async fn test_missing_header() {
        assert!(matches!(token_from(None).await, Err(ApiError::MissingAuth)));
    }

    #[tokio::test]
    async fn test_unknown_scheme() {
        assert!(matches!(
            token_from(Some("Basic dXNlcjpwYXNz")).await,
            Err(ApiError::InvalidAuthFormat)
        ));
        assert!(matches!(
            token_from(Some("JWT ")).await,
            Err(ApiError::InvalidAuthFormat)
        ));
    }
}
