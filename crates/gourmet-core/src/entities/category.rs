//! Category reference entity

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
}

impl Category {
    pub fn new(id: Snowflake, name: String) -> Self {
        Self { id, name }
    }
}
