//! Repository implementations for data access.

pub mod drive;
pub mod ledger;
pub mod opening_balance;
pub mod workflow;

pub use drive::DriveRepository;
pub use ledger::TransactionRepository;
pub use opening_balance::OpeningBalanceRepository;
pub use workflow::WorkflowRepository;
