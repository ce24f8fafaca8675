//! Version resolver.

use branchline_catalog::Catalog;
use branchline_core::{ResolvedVersion, SessionOptions, VersionReference};

use crate::error::{VersionError, VersionResult};

/// Resolves session version references against a catalog.
pub struct VersionResolver<'c> {
    catalog: &'c dyn Catalog,
}

impl<'c> VersionResolver<'c> {
    /// Create a resolver over a catalog.
    pub fn new(catalog: &'c dyn Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve `reference` for `source`.
    ///
    /// Returns `None` when the source does not store versioned tables; the
    /// reference is then irrelevant. `Unspecified` resolves to the source's
    /// default branch.
    pub fn resolve(
        &self,
        source: &str,
        reference: &VersionReference,
    ) -> VersionResult<Option<ResolvedVersion>> {
        if !self.catalog.supports_versioned_tables(source) {
            log::debug!("Source {} is not versioned; skipping resolution", source);
            return Ok(None);
        }
        let resolved = self.catalog.resolve_version(source, reference)?;
        log::debug!("Session {} in {} resolved to {}", reference, source, resolved);
        Ok(Some(resolved))
    }

    /// Resolve the reference the session holds for `source`.
    pub fn resolve_for_session(
        &self,
        session: &SessionOptions,
        source: &str,
    ) -> VersionResult<Option<ResolvedVersion>> {
        self.resolve(source, &session.version_for_source(source))
    }

    /// Reject resolved versions that are not branches.
    ///
    /// Only call this ahead of a mutation; reads may target tags and commits.
    pub fn require_branch(resolved: Option<&ResolvedVersion>, path: &str) -> VersionResult<()> {
        match resolved {
            None => Ok(()),
            Some(version) if version.is_branch() => Ok(()),
            Some(version) => Err(VersionError::not_mutable(
                path,
                version.kind(),
                version.name().unwrap_or(version.commit_hash()),
            )),
        }
    }
}
