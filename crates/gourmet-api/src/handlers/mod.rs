//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod accounts;
pub mod categories;
pub mod fallback;
pub mod health;
pub mod posts;
pub mod profiles;
pub mod restaurants;
pub mod root;
pub mod tokens;
