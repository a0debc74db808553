//! Shared types, errors, and configuration for Bookholder.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point amounts stored as integer minor units
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, LogConfig};
pub use error::{AppError, AppResult};
