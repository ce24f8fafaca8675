//! Scenario definition and runner.

use branchline_catalog::{Catalog, InMemoryCatalog};
use branchline_core::{CatalogPath, CommandResult, SessionOptions, Statement, VersionReference};
use branchline_mutation::RefreshObserver;
use branchline_session::{DdlEngine, EngineConfig, EngineResult};
use std::sync::Arc;

use crate::assertion::Assertion;
use crate::error::{ScenarioError, ScenarioResult};

struct Step {
    name: String,
    statement: Statement,
    session: SessionOptions,
    assertion: Assertion,
}

/// A sequence of statements run against one engine.
pub struct Scenario {
    name: String,
    catalog: Option<Arc<InMemoryCatalog>>,
    config: EngineConfig,
    observer: Option<Arc<dyn RefreshObserver>>,
    core_only: bool,
    session: SessionOptions,
    steps: Vec<Step>,
}

/// What a finished scenario leaves behind for further inspection.
pub struct ScenarioRun {
    pub catalog: Arc<InMemoryCatalog>,
    pub engine: DdlEngine,
    pub outcomes: Vec<EngineResult<Vec<CommandResult>>>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: None,
            config: EngineConfig::default(),
            observer: None,
            core_only: false,
            session: SessionOptions::new("tester"),
            steps: Vec::new(),
        }
    }

    pub fn catalog(mut self, catalog: Arc<InMemoryCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn observer(mut self, observer: Arc<dyn RefreshObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the engine without extension handlers.
    pub fn core_only(mut self) -> Self {
        self.core_only = true;
        self
    }

    /// Session used by every step added after this call.
    pub fn session(mut self, session: SessionOptions) -> Self {
        self.session = session;
        self
    }

    /// Add a step with its expected outcome.
    pub fn step<F>(mut self, name: impl Into<String>, statement: Statement, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.steps.push(Step {
            name: name.into(),
            statement,
            session: self.session.clone(),
            assertion: f(Assertion::new()),
        });
        self
    }

    /// Run every step in order, stopping at the first mismatch.
    pub fn run(self) -> ScenarioResult<ScenarioRun> {
        crate::init_logging();

        let catalog = self.catalog.ok_or_else(|| ScenarioError::MissingCatalog {
            scenario: self.name.clone(),
        })?;

        let shared: Arc<dyn Catalog> = catalog.clone();
        let mut builder = DdlEngine::builder(shared).config(self.config);
        if let Some(observer) = self.observer {
            builder = builder.observer(observer);
        }
        if self.core_only {
            builder = builder.without_extensions();
        }
        let engine = builder.build();

        let mut outcomes = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            let sql = step.statement.to_string();
            log::debug!("[{}] {}: {}", self.name, step.name, sql);

            let outcome = engine.execute(&sql, &step.statement, &step.session);
            step.assertion
                .check(&outcome)
                .map_err(|reason| ScenarioError::step_failed(&self.name, &step.name, &sql, reason))?;
            outcomes.push(outcome);
        }

        Ok(ScenarioRun {
            catalog,
            engine,
            outcomes,
        })
    }
}

impl ScenarioRun {
    /// Current column names of `table`, read at the default reference.
    pub fn columns(&self, table: &str) -> Vec<String> {
        self.columns_at(table, &VersionReference::Unspecified)
    }

    /// Column names of `table` at `version`. Empty if the table is absent.
    pub fn columns_at(
        &self,
        table: &str,
        version: &VersionReference,
    ) -> Vec<String> {
        let Ok(path) = CatalogPath::parse(table) else {
            return Vec::new();
        };
        match self.catalog.get_table_no_resolve(&path, version) {
            Ok(Some(info)) => info
                .schema
                .field_names()
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}
