//! Version resolution error types.

use branchline_core::{VersionKind, VersionReference};
use branchline_catalog::CatalogError;
use thiserror::Error;

/// Result type for version operations.
pub type VersionResult<T> = Result<T, VersionError>;

/// Errors raised while resolving or checking a version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Requested {reference} not found in source [{source_name}]")]
    Unresolvable {
        source_name: String,
        reference: VersionReference,
    },

    #[error("DDL and DML operations are only supported for branches - not on tags or commits. {path} is not a branch ({kind} {target})")]
    NotMutable {
        path: String,
        kind: VersionKind,
        target: String,
    },

    #[error("Source [{source_name}] not found")]
    SourceNotFound { source_name: String },

    /// The branch advanced between resolution and mutation.
    #[error("Branch [{branch}] was modified concurrently (expected {expected}, now {actual}). Retry the statement")]
    BranchMoved {
        branch: String,
        expected: String,
        actual: String,
    },

    /// Any other catalog failure met while resolving.
    #[error(transparent)]
    Catalog(CatalogError),
}

impl VersionError {
    pub fn unresolvable(source_name: impl Into<String>, reference: VersionReference) -> Self {
        Self::Unresolvable {
            source_name: source_name.into(),
            reference,
        }
    }

    pub fn not_mutable(
        path: impl Into<String>,
        kind: VersionKind,
        target: impl Into<String>,
    ) -> Self {
        Self::NotMutable {
            path: path.into(),
            kind,
            target: target.into(),
        }
    }
}

impl VersionError {
    /// Returns true for failures caused by the reference the user chose.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, VersionError::Catalog(_))
    }
}

impl From<CatalogError> for VersionError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ReferenceNotFound {
                source_name,
                reference,
            } => VersionError::Unresolvable {
                source_name,
                reference,
            },
            CatalogError::SourceNotFound { source_name } => {
                VersionError::SourceNotFound { source_name }
            }
            CatalogError::HeadMoved {
                branch,
                expected,
                actual,
            } => VersionError::BranchMoved {
                branch,
                expected,
                actual,
            },
            other => VersionError::Catalog(other),
        }
    }
}
