//! Core ledger rules for Bookholder.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types, validation rules, period arithmetic and credential hashing live here.
//!
//! # Modules
//!
//! - `ledger` - Accounts, double-entry transactions and period queries
//! - `auth` - Credential hashing

pub mod auth;
pub mod ledger;
