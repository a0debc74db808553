//! The ledger facade: the three stores over one injected pool.

use sea_orm::DatabaseConnection;

use crate::repositories::{AccountRepository, TransactionRepository, UserRepository};

/// Accounts, transactions and users sharing one connection pool.
///
/// Cloning is cheap; every clone uses the same pool.
#[derive(Debug, Clone)]
pub struct Ledger {
    db: DatabaseConnection,
    accounts: AccountRepository,
    transactions: TransactionRepository,
    users: UserRepository,
}

impl Ledger {
    /// Builds the facade over an open pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            accounts: AccountRepository::new(db.clone()),
            transactions: TransactionRepository::new(db.clone()),
            users: UserRepository::new(db.clone()),
            db,
        }
    }

    /// Account store.
    #[must_use]
    pub const fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    /// Transaction store.
    #[must_use]
    pub const fn transactions(&self) -> &TransactionRepository {
        &self.transactions
    }

    /// User store.
    #[must_use]
    pub const fn users(&self) -> &UserRepository {
        &self.users
    }

    /// The underlying pool.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
