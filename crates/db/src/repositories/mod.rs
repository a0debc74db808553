//! Repository layer for database operations.
//!
//! Each repository owns a clone of the connection pool and is safe to share
//! across tasks.

pub mod account;
pub mod transaction;
pub mod user;

pub use account::AccountRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
