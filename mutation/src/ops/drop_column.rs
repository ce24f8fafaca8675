//! DROP COLUMN operation.

use branchline_catalog::{Catalog, MutationOptions};
use branchline_core::CatalogPath;

use crate::error::MutationResult;
use crate::result::MutationOutcome;

/// Remove `column` from the table at `path` under the version in `options`.
///
/// Validation has already run; the catalog still enforces its own
/// invariants and its errors are returned unchanged.
pub fn execute_drop_column(
    catalog: &dyn Catalog,
    path: &CatalogPath,
    column: &str,
    options: &MutationOptions,
) -> MutationResult<MutationOutcome> {
    catalog.drop_column(path, column, options)?;
    Ok(MutationOutcome::ColumnDropped {
        path: path.clone(),
        column: column.to_string(),
    })
}
