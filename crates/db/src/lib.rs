//! Database layer with `SeaORM` entities and the ledger stores.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for accounts, transactions and users
//! - The account, transaction and user stores
//! - The `Ledger` facade composing them over one pool
//! - Schema migrations and database bootstrap

pub mod bootstrap;
pub mod entities;
pub mod error;
pub mod ledger;
pub mod migration;
pub mod repositories;

pub use bootstrap::{bootstrap, connect_pool, ensure_database};
pub use error::{StoreError, StoreResult};
pub use ledger::Ledger;
pub use migration::Migrator;
pub use repositories::{AccountRepository, TransactionRepository, UserRepository};
