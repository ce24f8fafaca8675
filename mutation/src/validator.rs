//! Mutation validation.
//!
//! Checks run in a fixed order and stop at the first failure. None of them
//! touch catalog state, so re-running them on an unchanged table gives the
//! same answer.

use branchline_catalog::Catalog;
use branchline_core::{messages, CatalogPath, CommandResult, TableInfo, TableSchema};

use crate::error::{ValidationError, ValidationResult};

/// Confirm the target supports DDL at all.
///
/// Returns the catalog's own failed result, unchanged, when it does not. A
/// disabled engine (`ddl_enabled == false`) is refused before the catalog is
/// asked.
pub fn check_ddl_support(
    catalog: &dyn Catalog,
    path: &CatalogPath,
    table: &TableInfo,
    ddl_enabled: bool,
) -> Option<CommandResult> {
    if !ddl_enabled {
        return Some(CommandResult::failed(messages::ERR_DDL_DISABLED));
    }
    let result = catalog.check_ddl_support(path, table);
    if result.ok {
        None
    } else {
        log::warn!("DDL not supported on {}: {}", path, result.summary);
        Some(result)
    }
}

/// Preconditions for removing `column` from a table with `schema`.
pub fn validate_drop_column(
    path: &CatalogPath,
    schema: &TableSchema,
    column: &str,
) -> ValidationResult<()> {
    if !schema.contains_field(column) {
        return Err(ValidationError::column_not_found(column, path));
    }
    if schema.field_count() <= 1 {
        return Err(ValidationError::would_empty_schema(path));
    }
    Ok(())
}
