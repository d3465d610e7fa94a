//! Post entity - a review of one menu item at a restaurant

use chrono::{DateTime, Utc};

use crate::value_objects::{Score, Snowflake};

/// A menu item review with its photo and 3D model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub restaurant_name: String,
    pub location: String,
    pub menu_item: String,
    /// Media path of the photo, relative to the media root
    pub menu_item_photo: String,
    /// Media path of the 3D model, relative to the media root
    pub menu_item_model: String,
    pub price: i32,
    pub score: Score,
    pub review_text: String,
    /// Linked category ids, sorted and deduplicated
    pub category: Vec<Snowflake>,
    pub created_on: DateTime<Utc>,
}

/// Partial update of a post. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub restaurant_name: Option<String>,
    pub location: Option<String>,
    pub menu_item: Option<String>,
    pub menu_item_photo: Option<String>,
    pub menu_item_model: Option<String>,
    pub price: Option<i32>,
    pub score: Option<Score>,
    pub review_text: Option<String>,
    pub category: Option<Vec<Snowflake>>,
}

impl Post {
    /// Maximum length of the restaurant, location and menu item fields
    pub const TEXT_MAX: usize = 100;

    /// Storage path for a post's photo: `posts/photos/{post_id}.{ext}`
    pub fn photo_path(post_id: Snowflake, ext: &str) -> String {
        format!("posts/photos/{post_id}.{ext}")
    }

    /// Storage path for a post's 3D model: `posts/models/{post_id}.{ext}`
    pub fn model_path(post_id: Snowflake, ext: &str) -> String {
        format!("posts/models/{post_id}.{ext}")
    }

    /// Sort and deduplicate a list of category ids
    pub fn normalize_categories(mut ids: Vec<Snowflake>) -> Vec<Snowflake> {
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Apply a partial update
    pub fn apply(&mut self, changes: PostChanges) {
        let PostChanges {
            restaurant_name,
            location,
            menu_item,
            menu_item_photo,
            menu_item_model,
            price,
            score,
            review_text,
            category,
        } = changes;

        if let Some(v) = restaurant_name {
            self.restaurant_name = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = menu_item {
            self.menu_item = v;
        }
        if let Some(v) = menu_item_photo {
            self.menu_item_photo = v;
        }
        if let Some(v) = menu_item_model {
            self.menu_item_model = v;
        }
        if let Some(v) = price {
            self.price = v;
        }
        if let Some(v) = score {
            self.score = v;
        }
        if let Some(v) = review_text {
            self.review_text = v;
        }
        if let Some(v) = category {
            self.category = Self::normalize_categories(v);
        }
    }
}
