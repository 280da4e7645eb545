//! Shared errors and configuration for Samiti.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error taxonomy with HTTP status mapping
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, LedgerConfig, ServerConfig};
pub use error::{AppError, AppResult};
