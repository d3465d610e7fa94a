//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gourmet-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod error;
mod post;
mod profile;
mod restaurant;
mod user;

pub use category::PgCategoryRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
pub use restaurant::PgRestaurantRepository;
pub use user::PgUserRepository;
