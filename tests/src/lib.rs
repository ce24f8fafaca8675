//! Branchline integration test framework.
//!
//! Scenarios run a sequence of statements against a fixture catalog and
//! check each step's outcome:
//!
//! ```ignore
//! Scenario::new("drop_name")
//!     .catalog(fixture::lakehouse())
//!     .step("drop", drop_column("files.events", "name"), |a| a.succeeded("Column [name] dropped"))
//!     .run()
//!     .unwrap();
//! ```

pub mod fixture;
mod scenario;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, ScenarioRun};

use branchline_core::{CatalogPath, Statement};

/// `ALTER TABLE <table> DROP COLUMN <column>`.
///
/// Panics on a malformed path; only meant for test literals.
pub fn drop_column(table: &str, column: &str) -> Statement {
    let path = CatalogPath::parse(table).unwrap_or_else(|e| panic!("bad table path {table}: {e}"));
    Statement::drop_column(path, column)
}

/// `SHOW BRANCHES [IN <source>]`.
pub fn show_branches(source: Option<&str>) -> Statement {
    Statement::show_branches(source.map(str::to_string))
}

/// Initialise logging once per test binary; honours `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::fixture::{self, RecordingObserver};
    pub use crate::{drop_column, init_logging, show_branches};
    pub use crate::{Assertion, Scenario, ScenarioError, ScenarioResult, ScenarioRun};
    pub use branchline_core::{
        messages, CatalogPath, CommandResult, SessionOptions, Statement, StatementKind,
        VersionReference,
    };
    pub use branchline_session::{DdlEngine, EngineConfig, EngineError, ErrorKind};
}
