//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod post;
mod profile;
mod restaurant;
mod user;

pub use category::CategoryModel;
pub use post::PostModel;
pub use profile::ProfileModel;
pub use restaurant::RestaurantModel;
pub use user::UserModel;
