//! Branchline Capability
//!
//! Statement handlers are looked up by statement kind in a registry filled
//! at startup by whichever edition is built. A kind with no registered
//! handler is a normal, typed outcome (`UnsupportedError`), not a crash.
//!
//! # Module Structure
//!
//! - `handler` - The `DirectHandler` trait and `ExecutionContext`
//! - `registry` - `CapabilityRegistry` mapping kinds to handler factories
//! - `error` - Dispatch and handler error types

mod error;
mod handler;
mod registry;

pub use branchline_core::StatementKind;
pub use error::{
    ConstructionError, DispatchError, DispatchResult, HandlerError, HandlerResult,
    UnsupportedError,
};
pub use handler::{DirectHandler, ExecutionContext};
pub use registry::{CapabilityRegistry, HandlerFactory};
