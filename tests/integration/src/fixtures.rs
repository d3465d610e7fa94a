//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Emails and names carry a
//! UUID so repeated runs against the same database never collide.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            email: format!("diner{}@example.com", unique_suffix()),
            password: "umami-Broth-42".to_string(),
        }
    }
}

/// Token obtain request
#[derive(Debug, Serialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

impl TokenRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Registered user
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
}

/// Token pair from `/authen/jwt/create/`
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

/// Access token from `/authen/jwt/refresh/`
#[derive(Debug, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    #[serde(rename = "nickName")]
    pub nick_name: String,
    pub user: String,
    pub created_on: String,
    pub img: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub restaurant_name: String,
    pub location: String,
    pub category: Vec<String>,
    pub menu_item: String,
    pub score: i16,
    pub score_label: String,
    pub price: i32,
    pub menu_item_photo: String,
    pub menu_item_model: String,
    pub review_text: String,
    pub created_on: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub location: String,
}

impl CreateRestaurantRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Ichiran {}", &unique_suffix()[..8]),
            location: "Shibuya".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RestaurantResponse {
    pub id: String,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Ramen {}", &unique_suffix()[..8]),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
}

/// Error body `{error: {code, message}}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// A file part with a fixed payload
pub fn file_part(file_name: &str, bytes: &'static [u8]) -> Part {
    Part::bytes(bytes).file_name(file_name.to_string())
}

/// Profile form with an avatar
pub fn profile_form(nick_name: &str) -> Form {
    Form::new()
        .text("nickName", nick_name.to_string())
        .part("img", file_part("avatar.png", b"\x89PNG avatar"))
}

/// Complete post form tagged with `categories`
pub fn post_form(categories: &[&str]) -> Form {
    post_form_with_score("5", categories)
}

pub fn post_form_with_score(score: &str, categories: &[&str]) -> Form {
    let form = Form::new()
        .text("restaurant_name", "Fuunji")
        .text("location", "Yoyogi")
        .text("menu_item", "Tsukemen")
        .text("price", "1100")
        .text("score", score.to_string())
        .text("review_text", "Thick fish broth, perfect noodles")
        .part("menu_item_photo", file_part("tsukemen.jpg", b"jpeg bytes"))
        .part("menu_item_model", file_part("tsukemen.glb", b"glTF model"));

    categories
        .iter()
        .fold(form, |form, id| form.text("category", (*id).to_string()))
}
