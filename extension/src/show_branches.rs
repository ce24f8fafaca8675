//! SHOW BRANCHES [IN source]

use branchline_capability::{
    ConstructionError, DirectHandler, ExecutionContext, HandlerError, HandlerResult,
};
use branchline_catalog::{Catalog, CatalogError};
use branchline_core::{messages, CommandResult, Statement, StatementKind};
use branchline_mutation::ValidationError;
use std::sync::Arc;

/// Lists the branches of a versioned source.
pub struct ShowBranchesHandler {
    catalog: Arc<dyn Catalog>,
    default_source: Option<String>,
}

impl ShowBranchesHandler {
    /// Build from the execution context.
    pub fn new(context: &ExecutionContext) -> Result<Self, ConstructionError> {
        Ok(Self {
            catalog: Arc::clone(context.catalog()),
            default_source: context
                .session()
                .default_schema()
                .map(|schema| schema.root().to_string()),
        })
    }
}

impl DirectHandler for ShowBranchesHandler {
    fn kind(&self) -> StatementKind {
        StatementKind::ShowBranches
    }

    fn to_result(&self, sql: &str, statement: &Statement) -> HandlerResult<Vec<CommandResult>> {
        let Statement::ShowBranches(stmt) = statement else {
            return Err(HandlerError::wrong_statement(self.kind(), statement.kind()));
        };
        let source = stmt
            .source
            .clone()
            .or_else(|| self.default_source.clone())
            .ok_or(ValidationError::NoSourceSpecified {
                statement: self.kind().label(),
            })?;

        log::debug!("{}: listing branches of {}", sql, source);
        let branches = self.catalog.list_branches(&source).map_err(|err| match err {
            CatalogError::NotVersioned { source_name } => {
                HandlerError::from(ValidationError::SourceNotVersioned { source_name })
            }
            CatalogError::SourceNotFound { source_name } => {
                HandlerError::from(ValidationError::SourceNotFound { source_name })
            }
            other => HandlerError::from(other),
        })?;
        if branches.is_empty() {
            return Ok(vec![CommandResult::successful(messages::MSG_NO_BRANCHES)]);
        }
        Ok(branches
            .into_iter()
            .map(|b| CommandResult::successful(format!("{} {}", b.name, b.commit_hash)))
            .collect())
    }
}
