//! Restaurant database model

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RestaurantModel {
    pub id: i64,
    pub name: String,
    pub location: String,
}
