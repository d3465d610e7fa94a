//! Custom extractors for API request handling
//!
//! Provides type-safe extraction of:
//! - Authenticated users from JWT tokens
//! - Validated JSON and multipart bodies
//! - Pagination parameters
//! - Path ids

mod auth;
mod form;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, JwtCredentials};
pub use form::{FormData, ValidatedForm};
pub use pagination::{Pagination, PaginationParams};
pub use path::IdPath;
pub use validated::ValidatedJson;
