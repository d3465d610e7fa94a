//! Profile entity <-> model mapper

use gourmet_core::entities::Profile;
use gourmet_core::value_objects::Snowflake;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            nick_name: model.nick_name,
            img: model.img,
            created_on: model.created_on,
        }
    }
}
