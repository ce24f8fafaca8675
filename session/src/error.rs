//! Engine error types.

use branchline_capability::{ConstructionError, DispatchError, HandlerError, UnsupportedError};
use branchline_catalog::CatalogError;
use branchline_core::StatementKind;
use branchline_mutation::{MutationError, ValidationError};
use branchline_version::VersionError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The four failure classes a statement can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Version,
    Unsupported,
    Internal,
}

/// Failures that are not the user's doing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// The capability is present but broken.
    #[error(transparent)]
    ConstructionFailed(#[from] ConstructionError),

    /// The catalog failed for reasons unrelated to user input.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Handler for {expected} received a {actual} statement")]
    WrongStatement {
        expected: StatementKind,
        actual: StatementKind,
    },
}

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Version(VersionError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Validation(_) => ErrorKind::Validation,
            EngineError::Version(_) => ErrorKind::Version,
            EngineError::Unsupported(_) => ErrorKind::Unsupported,
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true for errors reported to the user as their own mistake.
    pub fn is_user_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

impl From<VersionError> for EngineError {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::Catalog(inner) => EngineError::Internal(InternalError::Catalog(inner)),
            other => EngineError::Version(other),
        }
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::HeadMoved { .. } => EngineError::Version(err.into()),
            other => EngineError::Internal(InternalError::Catalog(other)),
        }
    }
}

impl From<DispatchError> for EngineError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Unsupported(e) => EngineError::Unsupported(e),
            DispatchError::ConstructionFailed(e) => EngineError::Internal(e.into()),
        }
    }
}

impl From<HandlerError> for EngineError {
    fn from(err: HandlerError) -> Self {
        match err {
            HandlerError::Validation(e) => e.into(),
            HandlerError::Version(e) => e.into(),
            HandlerError::Mutation(MutationError::Catalog(e)) => e.into(),
            HandlerError::Catalog(e) => e.into(),
            HandlerError::WrongStatement { expected, actual } => {
                EngineError::Internal(InternalError::WrongStatement { expected, actual })
            }
        }
    }
}
