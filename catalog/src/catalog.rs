//! The catalog interface consumed by the DDL pipeline.

use branchline_core::{
    CatalogPath, CommandResult, ResolvedVersion, TableInfo, VersionReference,
};

use crate::error::CatalogResult;
use crate::options::MutationOptions;

/// A branch and the commit it currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub commit_hash: String,
}

/// A catalog of sources and tables, possibly under version control.
///
/// Implementations are shared between concurrent statement executions and
/// must make each mutation atomic per path.
pub trait Catalog: Send + Sync {
    /// Qualify a possibly relative path. Paths whose root names a known
    /// source are returned as-is; others are prefixed with `default_schema`.
    fn resolve_single(&self, path: &CatalogPath, default_schema: Option<&CatalogPath>)
        -> CatalogPath;

    /// Read a table at `version` without further path resolution.
    fn get_table_no_resolve(
        &self,
        path: &CatalogPath,
        version: &VersionReference,
    ) -> CatalogResult<Option<TableInfo>>;

    /// Check that DDL may run against this table. A failed result explains why not.
    fn check_ddl_support(&self, path: &CatalogPath, table: &TableInfo) -> CommandResult;

    /// Whether the source stores natively versioned tables.
    fn supports_versioned_tables(&self, source: &str) -> bool;

    /// Resolve a symbolic reference against the source's current state.
    fn resolve_version(
        &self,
        source: &str,
        reference: &VersionReference,
    ) -> CatalogResult<ResolvedVersion>;

    /// Remove a column. Either fully applied or not applied at all.
    fn drop_column(
        &self,
        path: &CatalogPath,
        column: &str,
        options: &MutationOptions,
    ) -> CatalogResult<()>;

    /// Re-derive cached dataset metadata for a path.
    fn refresh_dataset(&self, path: &CatalogPath) -> CatalogResult<()>;

    /// List the branches of a versioned source, ordered by name.
    fn list_branches(&self, source: &str) -> CatalogResult<Vec<BranchInfo>>;
}
