//! Mutation result types.

use branchline_core::CatalogPath;

/// Outcome of a successful mutation: what changed, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A column was removed from a table.
    ColumnDropped { path: CatalogPath, column: String },
}

impl MutationOutcome {
    /// Path of the mutated table.
    pub fn path(&self) -> &CatalogPath {
        match self {
            MutationOutcome::ColumnDropped { path, .. } => path,
        }
    }

    /// Dropped column name, if this outcome is a drop.
    pub fn dropped_column(&self) -> Option<&str> {
        match self {
            MutationOutcome::ColumnDropped { column, .. } => Some(column),
        }
    }
}
