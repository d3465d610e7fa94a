//! Entity to DTO mappers
//!
//! Restaurants and categories convert with plain `From` impls. Profiles and posts
//! carry media paths and timestamps, so they are rendered through a [`Presenter`]
//! that knows the public media URL and the display time zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use gourmet_core::entities::{Category, Post, Profile, Restaurant, User};
use gourmet_core::traits::MediaStore;

use super::responses::{
    CategoryResponse, PostResponse, ProfileResponse, RegisterResponse, RestaurantResponse,
};

/// Date format used for `created_on`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders entities holding media paths and timestamps
#[derive(Clone, Copy)]
pub struct Presenter<'a> {
    media: &'a dyn MediaStore,
    time_zone: Tz,
}

impl<'a> Presenter<'a> {
    pub fn new(media: &'a dyn MediaStore, time_zone: Tz) -> Self {
        Self { media, time_zone }
    }

    /// Calendar date of `at` in the configured time zone
    pub fn date(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.time_zone).format(DATE_FORMAT).to_string()
    }

    pub fn url(&self, path: &str) -> String {
        self.media.url(path)
    }

    pub fn profile(&self, profile: &Profile) -> ProfileResponse {
        ProfileResponse {
            id: profile.id,
            nick_name: profile.nick_name.clone(),
            user: profile.user_id,
            created_on: self.date(profile.created_on),
            img: profile.img.as_deref().map(|path| self.url(path)),
        }
    }

    pub fn post(&self, post: &Post) -> PostResponse {
        PostResponse {
            id: post.id,
            author: post.author_id,
            restaurant_name: post.restaurant_name.clone(),
            location: post.location.clone(),
            category: post.category.clone(),
            menu_item: post.menu_item.clone(),
            score: post.score.value(),
            score_label: post.score.label(),
            price: post.price,
            menu_item_photo: self.url(&post.menu_item_photo),
            menu_item_model: self.url(&post.menu_item_model),
            review_text: post.review_text.clone(),
            created_on: self.date(post.created_on),
        }
    }
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

impl From<&Restaurant> for RestaurantResponse {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            location: restaurant.location.clone(),
        }
    }
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self::from(&restaurant)
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
