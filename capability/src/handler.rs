//! Direct statement handlers.

use branchline_catalog::Catalog;
use branchline_core::{CommandResult, SessionOptions, Statement, StatementKind};
use std::sync::Arc;

use crate::error::HandlerResult;

/// Everything a handler may use while executing one statement.
#[derive(Clone)]
pub struct ExecutionContext {
    catalog: Arc<dyn Catalog>,
    session: SessionOptions,
    ddl_enabled: bool,
}

impl ExecutionContext {
    pub fn new(catalog: Arc<dyn Catalog>, session: SessionOptions) -> Self {
        Self {
            catalog,
            session,
            ddl_enabled: true,
        }
    }

    pub fn with_ddl_enabled(mut self, enabled: bool) -> Self {
        self.ddl_enabled = enabled;
        self
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    pub fn session(&self) -> &SessionOptions {
        &self.session
    }

    pub fn ddl_enabled(&self) -> bool {
        self.ddl_enabled
    }
}

/// Implements one statement kind, producing one or more command results.
pub trait DirectHandler: Send {
    /// The statement kind this handler implements.
    fn kind(&self) -> StatementKind;

    /// Execute `statement`. `sql` is the original text, for logging only.
    fn to_result(&self, sql: &str, statement: &Statement) -> HandlerResult<Vec<CommandResult>>;
}
