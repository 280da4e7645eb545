//! Contribution drives and their collection progress.
//!
//! # Modules
//!
//! - `types` - Drive terms, contributions and progress records
//! - `error` - Drive-specific error types
//! - `service` - Drive creation rules
//! - `progress` - Collected amount, target and clamped percentage
//! - `registry` - Member registry collaborator

pub mod error;
pub mod progress;
pub mod registry;
pub mod service;
pub mod types;

#[cfg(test)]
mod progress_props;

pub use error::DriveError;
pub use progress::{collection_percentage, contributions_for, target_amount};
pub use registry::{FixedMemberRegistry, MemberRegistry, SnapshotMemberRegistry};
pub use service::DriveService;
pub use types::{Contribution, Drive, DriveDraft, DriveProgress, NewDrive};
