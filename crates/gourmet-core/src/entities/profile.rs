//! Profile entity - display information attached one-to-one to a user

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub nick_name: String,
    /// Media path of the avatar image, relative to the media root
    pub img: Option<String>,
    pub created_on: DateTime<Utc>,
}

impl Profile {
    /// Maximum nickname length in characters
    pub const NICK_NAME_MAX: usize = 20;

    pub fn new(id: Snowflake, user_id: Snowflake, nick_name: String) -> Self {
        Self {
            id,
            user_id,
            nick_name,
            img: None,
            created_on: Utc::now(),
        }
    }

    /// Storage path for an uploaded avatar: `avatars/{user_id}{nick_name}.{ext}`
    ///
    /// The nickname is reduced to a file-name-safe stem first, so the path is
    /// always a single file directly under `avatars/`.
    pub fn avatar_path(user_id: Snowflake, nick_name: &str, ext: &str) -> String {
        format!("avatars/{user_id}{}.{ext}", file_stem(nick_name))
    }
}

/// Whitespace becomes `_`; anything but letters, digits, `-`, `_` and `.` is dropped
fn file_stem(name: &str) -> String {
    name.trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                Some(c)
            } else {
                None
            }
        })
        .collect()
}
