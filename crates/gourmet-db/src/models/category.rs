//! Category database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
}
