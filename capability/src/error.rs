//! Capability error types.

use branchline_catalog::CatalogError;
use branchline_core::StatementKind;
use branchline_mutation::{MutationError, ValidationError};
use branchline_version::VersionError;
use thiserror::Error;

/// Result type for dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Result type for handler execution.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// No handler is available for a statement kind in this build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} action is not supported.", .kind.label())]
pub struct UnsupportedError {
    pub kind: StatementKind,
}

/// A handler is registered but could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to construct handler {}: {reason}", .kind.qualified_name())]
pub struct ConstructionError {
    pub kind: StatementKind,
    pub reason: String,
}

impl ConstructionError {
    pub fn new(kind: StatementKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

/// Errors from `CapabilityRegistry::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error(transparent)]
    ConstructionFailed(#[from] ConstructionError),
}

/// Errors a handler can return while executing a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Catalog(CatalogError),

    #[error("Handler for {expected} received a {actual} statement")]
    WrongStatement {
        expected: StatementKind,
        actual: StatementKind,
    },
}

impl From<CatalogError> for HandlerError {
    /// Reference problems surface as version errors; the rest stay catalog errors.
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ReferenceNotFound { .. } => HandlerError::Version(err.into()),
            other => HandlerError::Catalog(other),
        }
    }
}

impl HandlerError {
    pub fn wrong_statement(expected: StatementKind, actual: StatementKind) -> Self {
        Self::WrongStatement { expected, actual }
    }
}
