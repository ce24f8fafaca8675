//! Typed handler for ALTER TABLE ... DROP COLUMN

use branchline_capability::{
    ConstructionError, DirectHandler, ExecutionContext, HandlerError, HandlerResult,
};
use branchline_catalog::{Catalog, MutationOptions};
use branchline_core::{
    messages, CommandResult, DropColumnStmt, SessionOptions, Statement, StatementKind,
    VersionReference,
};
use branchline_mutation::{validator, MutationExecutor, RefreshDecider, RefreshScheduler, ValidationError};
use branchline_version::VersionResolver;
use std::sync::Arc;

use crate::engine::PendingRefreshes;

/// Removes a column from the table named by the statement.
pub struct DropColumnHandler {
    catalog: Arc<dyn Catalog>,
    session: SessionOptions,
    ddl_enabled: bool,
    scheduler: Arc<RefreshScheduler>,
    pending: Arc<PendingRefreshes>,
}

impl DropColumnHandler {
    pub(crate) fn new(
        context: &ExecutionContext,
        scheduler: Arc<RefreshScheduler>,
        pending: Arc<PendingRefreshes>,
    ) -> Result<Self, ConstructionError> {
        Ok(Self {
            catalog: Arc::clone(context.catalog()),
            session: context.session().clone(),
            ddl_enabled: context.ddl_enabled(),
            scheduler,
            pending,
        })
    }

    fn drop_column(&self, stmt: &DropColumnStmt) -> HandlerResult<Vec<CommandResult>> {
        let catalog = self.catalog.as_ref();
        let path = catalog.resolve_single(&stmt.table, self.session.default_schema());

        // Read and mutate against the same resolution.
        let resolved = VersionResolver::new(catalog).resolve_for_session(&self.session, path.root())?;
        let read_version = match &resolved {
            Some(version) => VersionReference::commit(version.commit_hash()),
            None => self.session.version_for_source(path.root()),
        };

        let table = catalog
            .get_table_no_resolve(&path, &read_version)?
            .ok_or_else(|| ValidationError::table_not_found(&path))?;

        log::debug!(
            "Current schema of {}: kind={}, columns={}",
            path,
            table.kind,
            table.schema.field_count()
        );

        if let Some(failed) = validator::check_ddl_support(catalog, &path, &table, self.ddl_enabled)
        {
            return Ok(vec![failed]);
        }

        validator::validate_drop_column(&path, &table.schema, &stmt.column)?;

        VersionResolver::require_branch(resolved.as_ref(), &path.to_string())?;

        let options = MutationOptions::builder().resolved_version(resolved).build();
        let outcome = MutationExecutor::new(catalog).drop_column(&path, &stmt.column, &options)?;

        let action = RefreshDecider::decide(catalog, &table, outcome.path());
        let handle = self.scheduler.schedule(action);
        if handle.is_pending() {
            self.pending.track(handle);
        }

        Ok(vec![CommandResult::successful(messages::column_dropped(
            &stmt.column,
        ))])
    }
}

impl DirectHandler for DropColumnHandler {
    fn kind(&self) -> StatementKind {
        StatementKind::DropColumn
    }

    fn to_result(&self, sql: &str, statement: &Statement) -> HandlerResult<Vec<CommandResult>> {
        match statement {
            Statement::DropColumn(stmt) => {
                log::info!(
                    "ALTER TABLE request: {} (user: {})",
                    sql,
                    self.session.user()
                );
                self.drop_column(stmt)
            }
            other => Err(HandlerError::wrong_statement(self.kind(), other.kind())),
        }
    }
}
