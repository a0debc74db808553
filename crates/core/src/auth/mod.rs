//! User credential hashing.
//!
//! Passwords are stored only as Argon2id PHC strings; the user store hashes
//! on create and update and verifies on authentication.

mod password;

pub use password::{PasswordError, hash_password, verify_decoy, verify_password};
