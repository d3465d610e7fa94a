//! Ports implemented by the infrastructure crates

mod repositories;
mod storage;

pub use repositories::{
    CategoryRepository, PageQuery, PostRepository, ProfileRepository, RepoResult,
    RestaurantRepository, UserRepository,
};
pub use storage::MediaStore;
