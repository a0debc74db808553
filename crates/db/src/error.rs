//! Store error taxonomy.

use bookholder_core::auth::PasswordError;
use bookholder_core::ledger::ValidationError;
use bookholder_shared::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by every store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the given identity.
    #[error("{0} does not exist")]
    NotFound(String),

    /// A row with the given identity already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// A ledger rule rejected the input before anything was written.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Name/password pair did not match a stored user.
    #[error("authentication failed")]
    AuthFailed,

    /// The credential backend failed.
    #[error("credential error: {0}")]
    Credential(#[from] PasswordError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Maps a unique constraint violation onto `AlreadyExists(what)`,
    /// passing every other database error through.
    pub(crate) fn from_write(err: DbErr, what: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists(what()),
            _ => Self::Database(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(what),
            StoreError::AlreadyExists(what) => Self::AlreadyExists(what),
            StoreError::Validation(rule) => Self::Validation(rule.to_string()),
            StoreError::AuthFailed => Self::Unauthorized("invalid name or password".to_string()),
            StoreError::Credential(e) => Self::Internal(e.to_string()),
            StoreError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookholder_shared::types::AccountId;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StoreError::NotFound("account 1".into()), 404),
            (StoreError::AlreadyExists("account 1".into()), 400),
            (StoreError::Validation(ValidationError::SameAccount), 400),
            (
                StoreError::Validation(ValidationError::AccountMissing(AccountId(9))),
                400,
            ),
            (StoreError::AuthFailed, 401),
            (StoreError::Credential(PasswordError::InvalidHash), 500),
            (StoreError::Database(DbErr::Custom("boom".into())), 500),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::AlreadyExists("account 1".into()).to_string(),
            "account 1 already exists"
        );
        assert_eq!(
            StoreError::NotFound("transaction 7".into()).to_string(),
            "transaction 7 does not exist"
        );
    }

    #[test]
    fn test_non_constraint_write_error_stays_database() {
        let err = StoreError::from_write(DbErr::Custom("boom".into()), || "x".into());
        assert!(matches!(err, StoreError::Database(_)));
    }
}
