//! Ledger validation errors.
//!
//! Every variant names one rule that is checked before any write happens.

use bookholder_shared::types::AccountId;
use thiserror::Error;

/// A violated ledger rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ========== Transaction Rules ==========
    /// Booked account does not exist.
    #[error("account {0} does not exist")]
    AccountMissing(AccountId),

    /// Offset account does not exist.
    #[error("offset account {0} does not exist")]
    OffsetAccountMissing(AccountId),

    /// Both sides of the movement are the same account.
    #[error("offset account must differ from account")]
    SameAccount,

    /// Amount is zero.
    #[error("amount must not be zero")]
    ZeroAmount,

    /// Amount has more fractional digits than storage keeps, or overflows it.
    #[error("amount must fit in whole cents")]
    AmountPrecision,

    /// Transaction date is unset.
    #[error("date must be set")]
    MissingDate,

    // ========== Period Rules ==========
    /// Period query without a year.
    #[error("year must be set")]
    MissingYear,

    /// Year outside the supported calendar range.
    #[error("year {0} is out of range")]
    InvalidYear(i32),

    /// Month outside 1..=12.
    #[error("month {0} is out of range 1-12")]
    InvalidMonth(u32),

    // ========== Account Rules ==========
    /// Account ids are caller-assigned and must be positive.
    #[error("account id must be greater than 0, got {0}")]
    InvalidAccountId(AccountId),

    // ========== User Rules ==========
    /// User name is empty.
    #[error("user name must not be empty")]
    EmptyName,

    /// Password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl ValidationError {
    /// Returns the stable rule code for API responses.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::AccountMissing(_) => "ACCOUNT_MISSING",
            Self::OffsetAccountMissing(_) => "OFFSET_ACCOUNT_MISSING",
            Self::SameAccount => "SAME_ACCOUNT",
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::AmountPrecision => "AMOUNT_PRECISION",
            Self::MissingDate => "MISSING_DATE",
            Self::MissingYear => "MISSING_YEAR",
            Self::InvalidYear(_) => "INVALID_YEAR",
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyPassword => "EMPTY_PASSWORD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_codes() {
        assert_eq!(
            ValidationError::AccountMissing(AccountId(1)).rule(),
            "ACCOUNT_MISSING"
        );
        assert_eq!(ValidationError::SameAccount.rule(), "SAME_ACCOUNT");
        assert_eq!(ValidationError::ZeroAmount.rule(), "ZERO_AMOUNT");
        assert_eq!(ValidationError::MissingDate.rule(), "MISSING_DATE");
        assert_eq!(ValidationError::MissingYear.rule(), "MISSING_YEAR");
        assert_eq!(ValidationError::InvalidMonth(13).rule(), "INVALID_MONTH");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::AccountMissing(AccountId(14)).to_string(),
            "account 14 does not exist"
        );
        assert_eq!(
            ValidationError::OffsetAccountMissing(AccountId(16)).to_string(),
            "offset account 16 does not exist"
        );
        assert_eq!(
            ValidationError::InvalidMonth(0).to_string(),
            "month 0 is out of range 1-12"
        );
    }
}
