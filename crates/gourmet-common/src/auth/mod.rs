//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{
    hash_password, is_usable_password, make_unusable_password, validate_password,
    verify_password, PasswordService,
};
