//! Double-entry bookkeeping rules.
//!
//! This module implements the storage-independent part of the ledger:
//! - Domain types for accounts, transactions and users
//! - Period (year / optional month) arithmetic for statement queries
//! - Validation of transaction invariants before anything is written
//! - Net movement calculation over a set of transactions

pub mod balance;
pub mod error;
pub mod period;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use balance::net_movement;
pub use error::ValidationError;
pub use period::Period;
pub use types::{Account, Transaction, TransactionInput, User};
pub use validation::{ValidatedTransaction, validate_account_id, validate_transaction};
