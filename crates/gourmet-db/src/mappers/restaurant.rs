//! Restaurant entity <-> model mapper

use gourmet_core::entities::Restaurant;
use gourmet_core::value_objects::Snowflake;

use crate::models::RestaurantModel;

impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Restaurant::new(Snowflake::new(model.id), model.name, model.location)
    }
}
