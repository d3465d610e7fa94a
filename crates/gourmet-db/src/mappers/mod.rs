//! Entity to model mappers
//!
//! This module provides conversions between domain entities (gourmet-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `PostInsert`: Prepare a post for insertion or update

mod category;
mod post;
mod profile;
mod restaurant;
mod user;

pub use post::PostInsert;
