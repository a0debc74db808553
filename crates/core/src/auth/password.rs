//! Argon2id password hashing with a random per-credential salt.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::OnceLock;
use thiserror::Error;

/// Hash checked when no stored credential exists, so the miss costs one
/// Argon2 run like a real mismatch does.
static DECOY_HASH: OnceLock<String> = OnceLock::new();

/// Failure of the hashing backend, never a wrong password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing failed.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Verification failed for a reason other than a mismatch.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Hashes a password into a PHC string.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use bookholder_core::auth::hash_password;
///
/// let hash = hash_password("1234").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Checks a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`, not an error.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed,
/// `PasswordError::VerifyError` on any other backend failure.
///
/// # Example
///
/// ```
/// use bookholder_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("1234").unwrap();
/// assert!(verify_password("1234", &hash).unwrap());
/// assert!(!verify_password("12345", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// Runs a full verification against a decoy hash and always reports a
/// mismatch.
///
/// # Errors
///
/// Returns a `PasswordError` if the decoy cannot be hashed or verified.
pub fn verify_decoy(password: &str) -> Result<bool, PasswordError> {
    let hash = match DECOY_HASH.get() {
        Some(hash) => hash,
        None => {
            let hash = hash_password("bookholder-decoy-credential")?;
            DECOY_HASH.get_or_init(|| hash)
        }
    };

    verify_password(password, hash).map(|_| false)
}
