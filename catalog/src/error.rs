//! Catalog error types.

use branchline_core::{CatalogPath, VersionReference};
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors reported by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Source [{source_name}] not found")]
    SourceNotFound { source_name: String },

    #[error("Table [{path}] not found")]
    TableNotFound { path: CatalogPath },

    #[error("Column [{column}] not found in table [{path}]")]
    ColumnNotFound { path: CatalogPath, column: String },

    #[error("Cannot remove the last column of table [{path}]")]
    LastColumn { path: CatalogPath },

    #[error("Source [{source_name}] does not support versioned tables")]
    NotVersioned { source_name: String },

    #[error("Reference {reference} not found in source [{source_name}]")]
    ReferenceNotFound {
        source_name: String,
        reference: VersionReference,
    },

    #[error("Mutations on versioned source [{source_name}] require a resolved branch")]
    MissingVersion { source_name: String },

    #[error("Reference {reference} in source [{source_name}] is not a branch")]
    ReferenceNotMutable {
        source_name: String,
        reference: String,
    },

    #[error("Branch [{branch}] moved from {expected} to {actual} since it was resolved")]
    HeadMoved {
        branch: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to refresh metadata for [{path}]: {reason}")]
    RefreshFailed { path: CatalogPath, reason: String },
}

impl CatalogError {
    pub fn source_not_found(source_name: impl Into<String>) -> Self {
        Self::SourceNotFound {
            source_name: source_name.into(),
        }
    }

    pub fn table_not_found(path: &CatalogPath) -> Self {
        Self::TableNotFound { path: path.clone() }
    }

    pub fn column_not_found(path: &CatalogPath, column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            path: path.clone(),
            column: column.into(),
        }
    }

    pub fn not_versioned(source_name: impl Into<String>) -> Self {
        Self::NotVersioned {
            source_name: source_name.into(),
        }
    }

    pub fn reference_not_found(source_name: impl Into<String>, reference: &VersionReference) -> Self {
        Self::ReferenceNotFound {
            source_name: source_name.into(),
            reference: reference.clone(),
        }
    }

    pub fn head_moved(
        branch: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::HeadMoved {
            branch: branch.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
