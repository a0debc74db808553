//! Ledger domain types.
//!
//! These are the values the stores accept and return. They carry no storage
//! detail: amounts are fixed-point and identifiers are typed.

use bookholder_shared::types::{AccountId, Amount, TransactionId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Caller-assigned identifier, must be positive.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Free-text classification, stored verbatim.
    pub kind: String,
}

impl Account {
    /// Creates an account value.
    #[must_use]
    pub fn new(id: AccountId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A stored double-entry movement between `account` and `offset_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier.
    pub id: TransactionId,
    /// Signed amount.
    pub amount: Amount,
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

/// Caller-supplied fields of a transaction, for create and update.
///
/// `date` is optional so an unset date can be reported as a validation
/// failure instead of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Signed amount, must be non-zero.
    pub amount: Amount,
    /// Direction of the movement on `account`.
    pub debit: bool,
    /// Opposite side of the movement.
    pub offset_account: AccountId,
    /// Account the movement is booked on.
    pub account: AccountId,
    /// When the movement happened.
    pub date: Option<DateTime<Utc>>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl TransactionInput {
    /// Returns the stored transaction this input produces under `id`.
    ///
    /// Returns `None` when the date is unset.
    #[must_use]
    pub fn into_transaction(self, id: TransactionId) -> Option<Transaction> {
        Some(Transaction {
            id,
            amount: self.amount,
            debit: self.debit,
            offset_account: self.offset_account,
            account: self.account,
            date: self.date?,
            description: self.description,
        })
    }
}

impl From<Transaction> for TransactionInput {
    fn from(transaction: Transaction) -> Self {
        Self {
            amount: transaction.amount,
            debit: transaction.debit,
            offset_account: transaction.offset_account,
            account: transaction.account,
            date: Some(transaction.date),
            description: transaction.description,
        }
    }
}

/// A user as returned by the store. The credential hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Unique login name.
    pub name: String,
}
