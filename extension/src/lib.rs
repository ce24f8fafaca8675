//! Branchline Extension
//!
//! Statement kinds that ship only with the extended edition. Call
//! [`register`] at startup to make them available; builds that leave this
//! crate out report them as unsupported.

mod show_branches;

use branchline_capability::{CapabilityRegistry, StatementKind};

pub use show_branches::ShowBranchesHandler;

/// Register every extension handler.
pub fn register(registry: &mut CapabilityRegistry) {
    registry.register(StatementKind::ShowBranches, |ctx| {
        Ok(Box::new(ShowBranchesHandler::new(ctx)?))
    });
}
