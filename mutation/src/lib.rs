//! Branchline Mutation
//!
//! Validate and apply schema mutations, then decide whether cached dataset
//! metadata must be refreshed.
//!
//! Responsibilities:
//! - Check DDL eligibility and statement preconditions
//! - Apply the change through the catalog's mutation entry point
//! - Decide and schedule the post-mutation metadata refresh
//!
//! # Module Structure
//!
//! - `validator` - DDL eligibility and per-statement precondition checks
//! - `executor` - MutationExecutor that calls into the catalog
//! - `ops/` - Individual operation implementations (drop column)
//! - `refresh` - Refresh decision and synchronous/asynchronous scheduling
//! - `error` - Error types for validation and mutation failures
//! - `result` - Outcome of a successful mutation

mod error;
mod executor;
mod ops;
pub mod refresh;
mod result;
pub mod validator;

pub use error::{MutationError, MutationResult, ValidationError, ValidationResult};
pub use executor::MutationExecutor;
pub use refresh::{
    LogRefreshObserver, RefreshAction, RefreshDecider, RefreshHandle, RefreshMode,
    RefreshObserver, RefreshScheduler,
};
pub use result::MutationOutcome;
