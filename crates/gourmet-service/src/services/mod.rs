//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod actor;
pub mod category;
pub mod context;
pub mod error;
mod media;
pub mod post;
pub mod profile;
pub mod restaurant;
pub mod token;
pub mod user;

// Re-export all services for convenience
pub use actor::Actor;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use profile::ProfileService;
pub use restaurant::RestaurantService;
pub use token::TokenService;
pub use user::UserService;
