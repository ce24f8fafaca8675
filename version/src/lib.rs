//! Branchline Version
//!
//! Turns a session's symbolic version reference into a resolved version
//! handle and guards mutations against immutable references.
//!
//! Resolution is never cached: every call asks the catalog, so a later call
//! may see a branch head that moved in between.

mod error;
mod resolver;

pub use error::{VersionError, VersionResult};
pub use resolver::VersionResolver;
