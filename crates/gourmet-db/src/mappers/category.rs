//! Category entity <-> model mapper

use gourmet_core::entities::Category;
use gourmet_core::value_objects::Snowflake;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category::new(Snowflake::new(model.id), model.name)
    }
}
