//! User entity <-> model mapper

use gourmet_core::entities::User;
use gourmet_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity. The password hash stays behind.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            last_login: model.last_login,
            date_joined: model.date_joined,
        }
    }
}
