//! Mutation options.

use branchline_core::ResolvedVersion;

/// Options passed opaquely to a catalog mutation call. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOptions {
    resolved_version: Option<ResolvedVersion>,
}

impl MutationOptions {
    pub fn builder() -> MutationOptionsBuilder {
        MutationOptionsBuilder::default()
    }

    /// The version the mutation targets; `None` for unversioned sources.
    pub fn resolved_version(&self) -> Option<&ResolvedVersion> {
        self.resolved_version.as_ref()
    }
}

/// Builder for `MutationOptions`.
#[derive(Debug, Default)]
pub struct MutationOptionsBuilder {
    resolved_version: Option<ResolvedVersion>,
}

impl MutationOptionsBuilder {
    pub fn resolved_version(mut self, version: Option<ResolvedVersion>) -> Self {
        self.resolved_version = version;
        self
    }

    pub fn build(self) -> MutationOptions {
        MutationOptions {
            resolved_version: self.resolved_version,
        }
    }
}
