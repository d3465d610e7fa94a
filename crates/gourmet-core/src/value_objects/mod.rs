//! Value objects - immutable types that represent domain concepts

mod email;
mod score;
mod snowflake;

pub use email::normalize_email;
pub use score::Score;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
