//! # gourmet-core
//!
//! Domain layer containing entities, value objects and the ports (repository and
//! media storage traits) implemented by the infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Category, Post, PostChanges, Profile, Restaurant, User};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, MediaStore, PageQuery, PostRepository, ProfileRepository, RepoResult,
    RestaurantRepository, UserRepository,
};
pub use value_objects::{
    normalize_email, Score, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
