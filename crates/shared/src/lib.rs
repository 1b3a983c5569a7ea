//! Shared types, errors, and configuration for the RWA ledger engine.
//!
//! This crate provides common types used across all other crates:
//! - Typed string IDs for type-safe entity references
//! - Application-wide error types for the process boundary
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig};
pub use error::{AppError, AppResult};
