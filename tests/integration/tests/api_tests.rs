//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable DATABASE_URL (JWT_SECRET and API_PORT are optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::multipart::Form;
use reqwest::StatusCode;
use serde_json::Value;

/// Register a fresh user and obtain its token pair
async fn signed_up(server: &TestServer) -> (RegisterResponse, TokenPair) {
    let request = RegisterRequest::unique();

    let response = server.post("/api/register/", &request).await.unwrap();
    let user: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/authen/jwt/create/", &TokenRequest::from_register(&request))
        .await
        .unwrap();
    let tokens: TokenPair = assert_json(response, StatusCode::OK).await.unwrap();

    (user, tokens)
}

async fn create_category(server: &TestServer) -> CategoryResponse {
    let response = server
        .post("/api/category/", &CreateCategoryRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(server: &TestServer, token: &str, categories: &[&str]) -> PostResponse {
    let response = server
        .post_form("/api/post/", token, post_form(categories))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
    assert_eq!(body["checks"]["storage"], "healthy");
}

// ============================================================================
// Account & Token Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/register/", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["email"], request.email.to_lowercase());
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/register/", &request).await.unwrap();

    let response = server.post("/api/register/", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "12345678".to_string();

    let response = server.post("/api/register/", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_requires_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = String::new();

    let response = server.post("/api/register/", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "EMAIL_REQUIRED");
}

#[tokio::test]
async fn test_token_create_with_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/register/", &request).await.unwrap();

    let mut login = TokenRequest::from_register(&request);
    login.password = "not-the-password".to_string();

    let response = server.post("/authen/jwt/create/", &login).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_token_refresh_and_verify() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signed_up(&server).await;

    let response = server
        .post("/authen/jwt/refresh/", &serde_json::json!({ "refresh": tokens.refresh }))
        .await
        .unwrap();
    let fresh: AccessToken = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/myprofile/", &fresh.access).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/authen/jwt/verify/", &serde_json::json!({ "token": fresh.access }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signed_up(&server).await;

    let response = server.get_auth("/api/myprofile/", &tokens.refresh).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/profile/").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_profile_with_avatar() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, tokens) = signed_up(&server).await;

    let response = server
        .post_form("/api/profile/", &tokens.access, profile_form("hanako"))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(profile.nick_name, "hanako");
    assert_eq!(profile.user, user.id);
    assert_eq!(profile.created_on.len(), "2024-01-01".len());

    // The avatar is served from the media directory
    let img = profile.img.expect("avatar url");
    let response = server.get(&img).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&response.bytes().await.unwrap()[..], b"\x89PNG avatar");

    // One profile per user
    let response = server
        .post_form("/api/profile/", &tokens.access, profile_form("hanako2"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // myprofile lists only the caller's profile
    let response = server.get_auth("/api/myprofile/", &tokens.access).await.unwrap();
    let mine: Vec<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, profile.id);
}

#[tokio::test]
async fn test_profile_owner_only_updates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signed_up(&server).await;
    let (_, other) = signed_up(&server).await;

    let response = server
        .post_form("/api/profile/", &owner.access, Form::new().text("nickName", "jiro"))
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(profile.img.is_none());

    let path = format!("/api/profile/{}/", profile.id);

    let response = server
        .patch_form(&path, &other.access, Form::new().text("nickName", "hijack"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &other.access).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // PUT without nickName is incomplete
    let response = server.put_form(&path, &owner.access, Form::new()).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .patch_form(&path, &owner.access, Form::new().text("nickName", "saburo"))
        .await
        .unwrap();
    let updated: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.nick_name, "saburo");

    let response = server.delete_auth(&path, &owner.access).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &owner.access).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user, tokens) = signed_up(&server).await;
    let category = create_category(&server).await;

    let post = create_post(&server, &tokens.access, &[&category.id]).await;

    assert_eq!(post.author, user.id);
    assert_eq!(post.category, vec![category.id.clone()]);
    assert_eq!(post.score, 5);
    assert_eq!(post.score_label, "★★★★★");
    assert_eq!(post.menu_item_photo, format!("/media/posts/photos/{}.jpg", post.id));
    assert_eq!(post.menu_item_model, format!("/media/posts/models/{}.glb", post.id));

    // Public endpoints need no token
    let response = server.get(&format!("/api/post_detail/{}/", post.id)).await.unwrap();
    let public: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.review_text, post.review_text);

    let response = server.get("/api/post_list/?limit=100").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_create_post_rejects_bad_input() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signed_up(&server).await;

    // Score outside 1-5
    let form = post_form_with_score("6", &[]);
    let response = server.post_form("/api/post/", &tokens.access, form).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Unknown category
    let response = server
        .post_form("/api/post/", &tokens.access, post_form(&["1"]))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // A photo where the model belongs
    let form = Form::new()
        .text("restaurant_name", "Fuunji")
        .text("location", "Yoyogi")
        .text("menu_item", "Tsukemen")
        .text("price", "1100")
        .text("score", "4")
        .text("review_text", "Good")
        .part("menu_item_photo", file_part("a.jpg", b"jpeg"))
        .part("menu_item_model", file_part("b.png", b"png"));
    let response = server.post_form("/api/post/", &tokens.access, form).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "UNSUPPORTED_FILE_TYPE");
}

#[tokio::test]
async fn test_update_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signed_up(&server).await;
    let (_, other) = signed_up(&server).await;
    let category = create_category(&server).await;
    let post = create_post(&server, &author.access, &[]).await;
    let path = format!("/api/post/{}/", post.id);

    let response = server
        .patch_form(&path, &other.access, Form::new().text("score", "1"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let form = Form::new()
        .text("score", "3")
        .text("category", category.id.clone())
        .part("menu_item_photo", file_part("new.png", b"new photo"));
    let response = server.patch_form(&path, &author.access, form).await.unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.score, 3);
    assert_eq!(updated.category, vec![category.id]);
    assert_eq!(updated.menu_item_photo, format!("/media/posts/photos/{}.png", post.id));
    // Omitted fields keep their value
    assert_eq!(updated.menu_item_model, post.menu_item_model);
    assert_eq!(updated.restaurant_name, post.restaurant_name);

    // PUT needs every text field
    let response = server
        .put_form(&path, &author.access, Form::new().text("score", "2"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signed_up(&server).await;
    let post = create_post(&server, &tokens.access, &[]).await;

    let photo = server.media_dir.path().join(format!("posts/photos/{}.jpg", post.id));
    assert!(photo.exists());

    let response = server
        .delete_auth(&format!("/api/post/{}/", post.id), &tokens.access)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    assert!(!photo.exists());

    let response = server.get(&format!("/api/post_detail/{}/", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Restaurant & Category Tests
// ============================================================================

#[tokio::test]
async fn test_restaurant_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/restaurant/", &CreateRestaurantRequest::unique())
        .await
        .unwrap();
    let restaurant: RestaurantResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/restaurant/{}/", restaurant.id);

    let response = server
        .patch(&path, &serde_json::json!({ "location": "Hakata" }))
        .await
        .unwrap();
    let updated: RestaurantResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, restaurant.name);
    assert_eq!(updated.location, "Hakata");

    let response = server.delete(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_category_delete_keeps_posts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signed_up(&server).await;
    let category = create_category(&server).await;
    let post = create_post(&server, &tokens.access, &[&category.id]).await;

    let response = server
        .delete(&format!("/api/category/{}/", category.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/post_detail/{}/", post.id)).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(post.category.is_empty());
}

#[tokio::test]
async fn test_api_root() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["restaurant"], "/api/restaurant/");
}
