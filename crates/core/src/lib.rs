//! Core business logic for Samiti.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `actor` - Who performs a state-changing call (recorded for audit)
//! - `ledger` - Income/expense transaction types, validation and balances
//! - `opening_balance` - Singleton-per-payment-method opening balance rules
//! - `workflow` - Expense approval state machine
//! - `drive` - Contribution drive terms and progress calculation

pub mod actor;
pub mod drive;
pub mod ledger;
pub mod opening_balance;
pub mod workflow;

pub use actor::{Actor, ActorRole};
