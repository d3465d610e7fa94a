//! Domain entities - core business objects

mod category;
mod post;
mod profile;
mod restaurant;
mod user;

pub use category::Category;
pub use post::{Post, PostChanges};
pub use profile::Profile;
pub use restaurant::Restaurant;
pub use user::User;
