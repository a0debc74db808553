//! `SeaORM` entity definitions for the ledger schema.
//!
//! No foreign keys are declared; referential checks happen in the stores.

pub mod accounts;
pub mod transactions;
pub mod users;
