//! Post entity <-> model mapper

use gourmet_core::entities::Post;
use gourmet_core::error::DomainError;
use gourmet_core::value_objects::{Score, Snowflake};

use crate::models::PostModel;

/// Convert PostModel to Post entity
///
/// Fails only if the stored score escaped the table's CHECK constraint.
impl TryFrom<PostModel> for Post {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        Ok(Post {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            restaurant_name: model.restaurant_name,
            location: model.location,
            menu_item: model.menu_item,
            menu_item_photo: model.menu_item_photo,
            menu_item_model: model.menu_item_model,
            price: model.price,
            score: Score::new(model.score)?,
            review_text: model.review_text,
            category: model.category_ids.into_iter().map(Snowflake::new).collect(),
            created_on: model.created_on,
        })
    }
}

/// Post entity values for database insertion/update
pub struct PostInsert<'a> {
    pub id: i64,
    pub author_id: i64,
    pub restaurant_name: &'a str,
    pub location: &'a str,
    pub menu_item: &'a str,
    pub menu_item_photo: &'a str,
    pub menu_item_model: &'a str,
    pub price: i32,
    pub score: i16,
    pub review_text: &'a str,
    pub category_ids: Vec<i64>,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            author_id: post.author_id.into_inner(),
            restaurant_name: &post.restaurant_name,
            location: &post.location,
            menu_item: &post.menu_item,
            menu_item_photo: &post.menu_item_photo,
            menu_item_model: &post.menu_item_model,
            price: post.price,
            score: post.score.value(),
            review_text: &post.review_text,
            category_ids: post.category.iter().map(|id| id.into_inner()).collect(),
        }
    }
}
