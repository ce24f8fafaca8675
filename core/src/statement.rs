//! Typed statement AST.
//!
//! The SQL parser is external; it hands the pipeline one of these nodes
//! with identifiers already split into paths.

use crate::CatalogPath;
use std::fmt;

/// Identifies a statement kind and the handler that implements it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatementKind {
    DropColumn,
    ShowBranches,
}

impl StatementKind {
    /// Fixed qualified name a handler registers under.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            StatementKind::DropColumn => "branchline.handlers.drop_column",
            StatementKind::ShowBranches => "branchline.handlers.show_branches",
        }
    }

    /// Human-readable label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::DropColumn => "ALTER TABLE DROP COLUMN",
            StatementKind::ShowBranches => "SHOW BRANCHES",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `ALTER TABLE <table> DROP COLUMN <column>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropColumnStmt {
    pub table: CatalogPath,
    pub column: String,
}

/// `SHOW BRANCHES [IN <source>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowBranchesStmt {
    pub source: Option<String>,
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    DropColumn(DropColumnStmt),
    ShowBranches(ShowBranchesStmt),
}

impl Statement {
    pub fn drop_column(table: CatalogPath, column: impl Into<String>) -> Self {
        Statement::DropColumn(DropColumnStmt {
            table,
            column: column.into(),
        })
    }

    pub fn show_branches(source: Option<String>) -> Self {
        Statement::ShowBranches(ShowBranchesStmt { source })
    }

    /// The kind used to dispatch this statement.
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::DropColumn(_) => StatementKind::DropColumn,
            Statement::ShowBranches(_) => StatementKind::ShowBranches,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::DropColumn(stmt) => {
                write!(f, "ALTER TABLE {} DROP COLUMN {}", stmt.table, stmt.column)
            }
            Statement::ShowBranches(stmt) => match &stmt.source {
                Some(source) => write!(f, "SHOW BRANCHES IN {}", source),
                None => write!(f, "SHOW BRANCHES"),
            },
        }
    }
}
