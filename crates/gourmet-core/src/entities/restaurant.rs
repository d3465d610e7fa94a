//! Restaurant reference entity

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: Snowflake,
    pub name: String,
    pub location: String,
}

impl Restaurant {
    pub fn new(id: Snowflake, name: String, location: String) -> Self {
        Self { id, name, location }
    }
}
