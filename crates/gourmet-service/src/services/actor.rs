//! The authenticated caller of a service operation

use gourmet_core::entities::User;
use gourmet_core::{DomainError, Snowflake};

use super::error::ServiceResult;

/// Identity and privileges of the user making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Snowflake,
    pub is_staff: bool,
}

impl Actor {
    pub fn new(id: Snowflake, is_staff: bool) -> Self {
        Self { id, is_staff }
    }

    /// Owners and staff may modify a resource, everyone else gets `NotOwner`
    pub fn ensure_can_modify(&self, owner_id: Snowflake) -> ServiceResult<()> {
        if self.id == owner_id || self.is_staff {
            Ok(())
        } else {
            Err(DomainError::NotOwner.into())
        }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.is_staff)
    }
}
