//! Shared setup for store integration tests.

#![allow(dead_code)]

use bookholder_core::ledger::{Account, TransactionInput};
use bookholder_db::{Ledger, bootstrap};
use bookholder_shared::DatabaseConfig;
use bookholder_shared::types::{AccountId, Amount};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

/// Bootstraps a fresh in-memory SQLite ledger.
///
/// The pool holds exactly one connection: every connection to
/// `sqlite::memory:` opens its own empty database.
pub async fn setup() -> Ledger {
    bootstrap(&memory_config())
        .await
        .expect("Failed to bootstrap in-memory ledger")
}

pub fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// Creates accounts with the given ids.
pub async fn seed_accounts(ledger: &Ledger, ids: &[i64]) {
    for &id in ids {
        ledger
            .accounts()
            .create(&Account::new(AccountId(id), format!("Account {id}"), "1000"))
            .await
            .expect("Failed to create account");
    }
}

pub fn make_input(account: i64, offset_account: i64, date: DateTime<Utc>) -> TransactionInput {
    TransactionInput {
        amount: Amount::new(dec!(1234.56)),
        debit: true,
        offset_account: AccountId(offset_account),
        account: AccountId(account),
        date: Some(date),
        description: "Test Transaction".to_string(),
    }
}
