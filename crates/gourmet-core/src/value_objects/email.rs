//! Email normalization

/// Normalize an email address the way account lookups expect it
///
/// Only the domain part is lowercased. The local part is case-sensitive per
/// RFC 5321 and is kept as typed. Input without an `@` is returned unchanged.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}
