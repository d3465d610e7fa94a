//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub nick_name: String,
    pub img: Option<String>,
    pub created_on: DateTime<Utc>,
}
