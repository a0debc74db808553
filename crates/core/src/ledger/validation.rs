//! Business rule validation for ledger operations.
//!
//! Only the rules that need no storage access are checked here. Account
//! existence is checked by the transaction store inside its database
//! transaction and reported with the same error type.

use bookholder_shared::types::{AccountId, Amount};
use chrono::{DateTime, Utc};

use super::error::ValidationError;
use super::types::TransactionInput;

/// A transaction input that passed every storage-independent rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTransaction {
    /// Signed amount.
    pub amount: Amount,
    /// Amount in minor units, as persisted.
    pub minor_units: i64,
    /// Direction of the movement on `account`.
    pub debit: bool,
    /// Opposite side of the movement.
    pub offset_account: AccountId,
    /// Account the movement is booked on.
    pub account: AccountId,
    /// When the movement happened.
    pub date: DateTime<Utc>,
    /// Free-text description.
    pub description: String,
}

/// Validates a transaction input.
///
/// Rules, in order: the two sides differ, the amount is non-zero, the amount
/// fits in minor units, the date is set.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_transaction(
    input: &TransactionInput,
) -> Result<ValidatedTransaction, ValidationError> {
    if input.offset_account == input.account {
        return Err(ValidationError::SameAccount);
    }

    if input.amount.is_zero() {
        return Err(ValidationError::ZeroAmount);
    }

    let minor_units = input
        .amount
        .to_minor_units()
        .ok_or(ValidationError::AmountPrecision)?;

    let date = input.date.ok_or(ValidationError::MissingDate)?;

    Ok(ValidatedTransaction {
        amount: input.amount,
        minor_units,
        debit: input.debit,
        offset_account: input.offset_account,
        account: input.account,
        date,
        description: input.description.clone(),
    })
}

/// Validates a caller-assigned account id.
///
/// # Errors
///
/// Returns `InvalidAccountId` if the id is not positive.
pub fn validate_account_id(id: AccountId) -> Result<(), ValidationError> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::InvalidAccountId(id))
    }
}
