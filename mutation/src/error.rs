//! Mutation error types.

use branchline_catalog::CatalogError;
use branchline_core::{messages, CatalogPath};
use thiserror::Error;

/// Result type for validation checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// A requested change is not legal against the table's current state.
///
/// Always user-facing; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Table [{path}] not found")]
    TableNotFound { path: CatalogPath },

    #[error("Column [{column}] is not present in table [{path}]")]
    ColumnNotFound { column: String, path: CatalogPath },

    #[error("{}", messages::ERR_DROP_ALL_COLUMNS)]
    WouldEmptySchema { path: CatalogPath },

    #[error("No source specified for {statement}. Use {statement} IN <source>")]
    NoSourceSpecified { statement: &'static str },

    #[error("Source [{source_name}] does not support versioning")]
    SourceNotVersioned { source_name: String },

    #[error("Source [{source_name}] not found")]
    SourceNotFound { source_name: String },
}

impl ValidationError {
    pub fn table_not_found(path: &CatalogPath) -> Self {
        Self::TableNotFound { path: path.clone() }
    }

    pub fn column_not_found(column: impl Into<String>, path: &CatalogPath) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            path: path.clone(),
        }
    }

    pub fn would_empty_schema(path: &CatalogPath) -> Self {
        Self::WouldEmptySchema { path: path.clone() }
    }
}

/// The catalog rejected or failed a mutation. Carries the catalog's error as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
