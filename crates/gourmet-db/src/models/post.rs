//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table, joined with its category links
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub restaurant_name: String,
    pub location: String,
    pub menu_item: String,
    pub menu_item_photo: String,
    pub menu_item_model: String,
    pub price: i32,
    pub score: i16,
    pub review_text: String,
    pub created_on: DateTime<Utc>,
    /// Aggregated from `post_categories`, ascending
    pub category_ids: Vec<i64>,
}
