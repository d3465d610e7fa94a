//! User entity - an account identified by its email address

use chrono::{DateTime, Utc};
use validator::ValidateEmail;

use crate::error::DomainError;
use crate::value_objects::{normalize_email, Snowflake};

/// User account. The password hash is stored separately and never travels with the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Create a regular, active user
    ///
    /// The email is required and is normalized before it is stored.
    pub fn new(id: Snowflake, email: &str) -> Result<Self, DomainError> {
        if email.trim().is_empty() {
            return Err(DomainError::EmailRequired);
        }

        let email = normalize_email(email);
        if !email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }

        Ok(Self {
            id,
            email,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            last_login: None,
            date_joined: Utc::now(),
        })
    }

    /// Create a user with both the staff and superuser flags set
    pub fn new_superuser(id: Snowflake, email: &str) -> Result<Self, DomainError> {
        let mut user = Self::new(id, email)?;
        user.is_staff = true;
        user.is_superuser = true;
        Ok(user)
    }

    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(Snowflake::new(1), "Someone@Example.COM").unwrap();
        assert_eq!(user.email, "Someone@example.com");
        assert!(user.is_active);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_empty_email_is_rejected() {
        assert!(matches!(
            User::new(Snowflake::new(1), ""),
            Err(DomainError::EmailRequired)
        ));
        assert!(matches!(
            User::new(Snowflake::new(1), "   "),
            Err(DomainError::EmailRequired)
        ));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        assert!(matches!(
            User::new(Snowflake::new(1), "no-at-sign"),
            Err(DomainError::InvalidEmail)
        ));
    }

    #[test]
    fn test_superuser_has_staff_and_superuser_flags() {
        let user = User::new_superuser(Snowflake::new(1), "root@example.com").unwrap();
        assert!(user.is_staff);
        assert!(user.is_superuser);
        assert!(user.is_active);
    }
}
