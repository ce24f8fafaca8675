//! Common user-facing messages used across Branchline components.
//!
//! These constants keep wording consistent between handlers and tests.

/// Error: a drop would leave the table without columns.
pub const ERR_DROP_ALL_COLUMNS: &str = "Cannot drop all columns of a table";

/// Error: DDL has been disabled through engine configuration.
pub const ERR_DDL_DISABLED: &str = "DDL operations are disabled on this engine";

/// Result: SHOW BRANCHES found nothing.
pub const MSG_NO_BRANCHES: &str = "No branches found";

/// Format the success message for a dropped column.
pub fn column_dropped(column: &str) -> String {
    format!("Column [{}] dropped", column)
}
