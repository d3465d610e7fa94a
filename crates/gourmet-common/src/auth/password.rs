//! Password hashing, verification and the registration password policy
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use gourmet_core::DomainError;
use rand::{distributions::Alphanumeric, Rng};

use crate::error::AppError;

/// Prefix marking a stored hash that no password can match
const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Passwords rejected outright regardless of length
const COMMON_PASSWORDS: &[&str] = &[
    "123456789", "12345678", "password", "password1", "password123", "qwertyuiop", "qwerty123",
    "iloveyou", "sunshine", "princess", "football", "baseball", "welcome1", "welcome123",
    "admin123", "administrator", "letmein1", "trustno1", "1q2w3e4r", "1qaz2wsx", "zaq12wsx",
    "passw0rd", "p@ssw0rd", "abc12345", "abcd1234", "asdfghjkl", "monkey123", "dragon123",
    "superman", "starwars", "whatever", "computer", "internet", "michael1", "charlie1",
    "shadow123", "master123", "jennifer", "11111111", "00000000", "88888888", "changeme",
    "qwertyui", "asdf1234", "zxcvbnm1", "gourmet123",
];

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// Unusable hashes never match.
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    if !is_usable_password(hash) {
        return Ok(false);
    }

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Produce a stored value that can never be matched by any password
///
/// Used for accounts created without a password.
pub fn make_unusable_password() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
        .map(char::from)
        .collect();
    format!("{UNUSABLE_PASSWORD_PREFIX}{suffix}")
}

#[must_use]
pub fn is_usable_password(hash: &str) -> bool {
    !hash.is_empty() && !hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password, or produce an unusable hash when none is given
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash_optional(&self, password: Option<&str>) -> Result<String, AppError> {
        match password {
            Some(password) => hash_password(password),
            None => Ok(make_unusable_password()),
        }
    }
}

/// Validate a new password against the registration policy
///
/// The password must:
/// - be at least 8 characters long
/// - not be entirely numeric
/// - not be a commonly used password
/// - not be too similar to the email address
///
/// Every failing rule is reported in the error message.
///
/// # Errors
/// Returns `DomainError::WeakPassword` listing the failed rules
pub fn validate_password(password: &str, email: &str) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(format!(
            "This password is too short. It must contain at least {MIN_PASSWORD_LENGTH} characters."
        ));
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        problems.push("This password is too common.".to_string());
    }

    if is_similar_to_email(&lowered, email) {
        problems.push("The password is too similar to the email address.".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Domain(DomainError::WeakPassword(problems.join(" "))))
    }
}

/// A password is too similar when it contains the email's local part, the whole
/// email, or is itself contained in the email
fn is_similar_to_email(lowered_password: &str, email: &str) -> bool {
    let email = email.trim().to_lowercase();
    if email.is_empty() || lowered_password.is_empty() {
        return false;
    }

    let local = email.split('@').next().unwrap_or_default();
    (local.chars().count() >= 3 && lowered_password.contains(local))
        || email.contains(lowered_password)
}
