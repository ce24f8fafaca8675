//! Mutation executor - applies validated changes through the catalog.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/drop_column.rs` - DROP COLUMN

use branchline_catalog::{Catalog, MutationOptions};
use branchline_core::CatalogPath;

use crate::error::MutationResult;
use crate::ops;
use crate::result::MutationOutcome;

/// Mutation executor.
pub struct MutationExecutor<'c> {
    catalog: &'c dyn Catalog,
}

impl<'c> MutationExecutor<'c> {
    /// Create a new executor.
    pub fn new(catalog: &'c dyn Catalog) -> Self {
        Self { catalog }
    }

    /// Execute a DROP COLUMN.
    pub fn drop_column(
        &self,
        path: &CatalogPath,
        column: &str,
        options: &MutationOptions,
    ) -> MutationResult<MutationOutcome> {
        log::debug!("Dropping column {} from {}", column, path);
        ops::execute_drop_column(self.catalog, path, column, options)
    }
}
