//! Route definitions
//!
//! Resource routes live under `/api`, token routes under `/authen/jwt`. Every
//! path keeps its trailing slash.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{accounts, categories, health, posts, profiles, restaurants, root, tokens};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/", get(root::api_root))
        .nest("/api", api_routes())
        .nest("/authen/jwt", token_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Serve uploaded files from `upload_dir` under `media_url`
///
/// Returns `None` when `media_url` points at another host.
pub fn media_routes(upload_dir: &str, media_url: &str) -> Option<Router<AppState>> {
    let prefix = media_url.trim_end_matches('/');
    if !prefix.starts_with('/') || prefix.len() < 2 {
        return None;
    }
    Some(Router::new().nest_service(prefix, ServeDir::new(upload_dir)))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(accounts::register))
        .route("/myprofile/", get(profiles::my_profiles))
        .merge(profile_routes())
        .merge(post_routes())
        .merge(restaurant_routes())
        .merge(category_routes())
}

/// Token routes
fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/create/", post(tokens::create_token))
        .route("/refresh/", post(tokens::refresh_token))
        .route("/verify/", post(tokens::verify_token))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile/",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route(
            "/profile/:id/",
            get(profiles::get_profile)
                .put(profiles::replace_profile)
                .patch(profiles::update_profile)
                .delete(profiles::delete_profile),
        )
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/post/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/post/:id/",
            get(posts::get_post)
                .put(posts::replace_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        // Public, read-only
        .route("/post_list/", get(posts::list_public_posts))
        .route("/post_detail/:id/", get(posts::get_public_post))
}

fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurant/",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/restaurant/:id/",
            get(restaurants::get_restaurant)
                .put(restaurants::replace_restaurant)
                .patch(restaurants::update_restaurant)
                .delete(restaurants::delete_restaurant),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/category/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/category/:id/",
            get(categories::get_category)
                .put(categories::replace_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
}
