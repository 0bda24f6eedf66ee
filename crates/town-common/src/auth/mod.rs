//! Credential utilities

mod password;
mod token;

pub use password::{hash_password, PasswordService};
pub use token::{generate_token, TOKEN_BYTES};
