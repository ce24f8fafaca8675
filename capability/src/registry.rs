//! The CapabilityRegistry - statement kind to handler factory lookup.

use branchline_core::StatementKind;
use std::collections::HashMap;

use crate::error::{ConstructionError, DispatchResult, UnsupportedError};
use crate::handler::{DirectHandler, ExecutionContext};

/// Builds a fresh handler from the current execution context.
pub type HandlerFactory = Box<
    dyn Fn(&ExecutionContext) -> Result<Box<dyn DirectHandler>, ConstructionError> + Send + Sync,
>;

/// Maps statement kinds to handler factories.
///
/// Populated once at startup. Factories are keyed by the kind's qualified
/// name; a lookup miss is reported as `UnsupportedError`.
#[derive(Default)]
pub struct CapabilityRegistry {
    factories: HashMap<&'static str, HandlerFactory>,
}

impl CapabilityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: StatementKind, factory: F) -> &mut Self
    where
        F: Fn(&ExecutionContext) -> Result<Box<dyn DirectHandler>, ConstructionError>
            + Send
            + Sync
            + 'static,
    {
        if self
            .factories
            .insert(kind.qualified_name(), Box::new(factory))
            .is_some()
        {
            log::debug!("Replaced handler factory for {}", kind.qualified_name());
        }
        self
    }

    /// Returns true if a handler for `kind` is available in this build.
    pub fn contains(&self, kind: StatementKind) -> bool {
        self.factories.contains_key(kind.qualified_name())
    }

    /// Qualified names of every registered kind, sorted.
    pub fn registered_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Build a handler for `kind`.
    ///
    /// Each call constructs a new handler; nothing is cached.
    pub fn dispatch(
        &self,
        kind: StatementKind,
        context: &ExecutionContext,
    ) -> DispatchResult<Box<dyn DirectHandler>> {
        let factory = self
            .factories
            .get(kind.qualified_name())
            .ok_or(UnsupportedError { kind })?;
        let handler = factory(context).map_err(|err| {
            log::error!("Handler for {} is present but failed to build: {}", kind, err);
            err
        })?;
        Ok(handler)
    }
}
