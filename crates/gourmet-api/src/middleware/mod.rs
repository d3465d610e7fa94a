//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, rate limiting, and other middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    BoxError, Router,
};
use gourmet_common::{AppError, CorsConfig, RateLimitConfig};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorError,
    GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this get a 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply request ID, tracing and timeout layers without rate limiting or CORS
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(HandleErrorLayer::new(handle_timeout))
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
    )
}

/// Apply middleware stack with rate limiting and configured CORS
///
/// # Errors
/// Returns `AppError::Config` when the rate limit settings are zero.
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    // One token is replenished every 1/rps seconds; zero leaves the period empty
    let replenish_nanos = 1_000_000_000_u64
        .checked_div(rate_limit_config.requests_per_second.into())
        .unwrap_or(0);

    // Rate limit is global, not per client address
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(replenish_nanos)
            .burst_size(rate_limit_config.burst)
            .key_extractor(GlobalKeyExtractor)
            .error_handler(rate_limit_response)
            .finish()
            .ok_or_else(|| {
                AppError::Config(
                    "RATE_LIMIT_REQUESTS_PER_SECOND and RATE_LIMIT_BURST must be positive".to_string(),
                )
            })?,
    );

    // Layers wrap in reverse order:
    // Request -> RateLimit -> RequestID -> Trace -> Timeout -> CORS -> Handler
    Ok(router
        // CORS (innermost - applied last to outgoing responses)
        .layer(create_cors_layer_from_config(cors_config, is_production))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
        )
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request ID propagation
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID generation
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        // Rate limiting (outermost - applied first to incoming requests)
        .layer(GovernorLayer {
            config: governor_conf,
        }))
}

/// Render governor rejections with the API error body, keeping its rate limit headers
fn rate_limit_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { headers, .. } => {
            let mut response = ApiError::from(AppError::RateLimitExceeded).into_response();
            if let Some(headers) = headers {
                response.headers_mut().extend(headers);
            }
            response
        }
        other => ApiError::internal(other).into_response(),
    }
}

async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(anyhow::anyhow!(err))
    }
}

fn make_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Create CORS layer from configuration
fn create_cors_layer_from_config(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    // Production only allows configured origins. Development allows any origin
    // while none are configured.
    if is_production || !config.allowed_origins.is_empty() {
        if config.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS: No allowed origins configured in production mode. \
                 Requests from browsers will be blocked."
            );
            base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
        } else {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin.parse::<HeaderValue>().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin: {}", origin);
                        None
                    })
                })
                .collect();

            tracing::info!("CORS: Allowing {} configured origins", origins.len());
            base_layer.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(Any)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_zero_rate_limit_is_rejected() {
        let result = apply_middleware_with_config(
            Router::new(),
            &RateLimitConfig {
                requests_per_second: 0,
                burst: 0,
            },
            &CorsConfig {
                allowed_origins: vec![],
            },
            false,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rate_limit_response_uses_error_body() {
        let response = rate_limit_response(GovernorError::TooManyRequests {
            wait_time: 1,
            headers: None,
        });
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_service_unavailable() {
        let err = handle_timeout(Box::new(tower::timeout::error::Elapsed::new())).await;
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "REQUEST_TIMEOUT");

        let err = handle_timeout("connection reset".into()).await;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
