//! CatalogBuilder for constructing an InMemoryCatalog.

use branchline_core::{CatalogPath, Field, PathError, TableInfo, TableKind, TableSchema};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::memory::{commit_hash, table_key, InMemoryCatalog, Snapshot, SourceState};

/// Errors that can occur during catalog construction.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Duplicate source name: {0}")]
    DuplicateSource(String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Duplicate table: {0}")]
    DuplicateTable(String),

    #[error("Table {table} does not belong to source {source_name}")]
    ForeignTable { table: String, source_name: String },

    #[error("Invalid table path: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Source {0} is not versioned")]
    NotVersioned(String),

    #[error("Unknown branch {branch} in source {source_name}")]
    UnknownBranch { source_name: String, branch: String },

    #[error("Reference {name} already exists in source {source_name}")]
    DuplicateReference { source_name: String, name: String },
}

/// Builder for constructing an `InMemoryCatalog`.
#[derive(Debug)]
pub struct CatalogBuilder {
    /// Next commit sequence number to allocate.
    next_commit: u64,
    /// Sources keyed by lowercased name.
    sources: HashMap<String, SourceState>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            next_commit: 1,
            sources: HashMap::new(),
        }
    }

    /// Add a source.
    pub fn add_source(&mut self, name: impl Into<String>) -> SourceBuilder<'_> {
        SourceBuilder {
            builder: self,
            name: name.into(),
            versioned: false,
            default_branch: "main".to_string(),
            ddl_unsupported: None,
            fail_refresh: false,
            tables: Vec::new(),
        }
    }

    /// Create a branch pointing at the current head of `from`.
    pub fn add_branch(
        &mut self,
        source: &str,
        name: impl Into<String>,
        from: &str,
    ) -> Result<&mut Self, BuildError> {
        let name = name.into();
        let state = self.versioned_source(source)?;
        let head = Self::head_of(state, from)?;
        if state.branches.contains_key(&name) || state.tags.contains_key(&name) {
            return Err(BuildError::DuplicateReference {
                source_name: state.name.clone(),
                name,
            });
        }
        state.branches.insert(name, head);
        Ok(self)
    }

    /// Create a tag at the current head of `from`.
    pub fn add_tag(
        &mut self,
        source: &str,
        name: impl Into<String>,
        from: &str,
    ) -> Result<&mut Self, BuildError> {
        let name = name.into();
        let state = self.versioned_source(source)?;
        let head = Self::head_of(state, from)?;
        if state.branches.contains_key(&name) || state.tags.contains_key(&name) {
            return Err(BuildError::DuplicateReference {
                source_name: state.name.clone(),
                name,
            });
        }
        state.tags.insert(name, head);
        Ok(self)
    }

    /// Build the catalog.
    pub fn build(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.sources, self.next_commit)
    }

    fn versioned_source(&mut self, source: &str) -> Result<&mut SourceState, BuildError> {
        let state = self
            .sources
            .get_mut(&source.to_lowercase())
            .ok_or_else(|| BuildError::UnknownSource(source.to_string()))?;
        if !state.versioned {
            return Err(BuildError::NotVersioned(state.name.clone()));
        }
        Ok(state)
    }

    fn head_of(state: &SourceState, branch: &str) -> Result<String, BuildError> {
        state
            .branches
            .get(branch)
            .cloned()
            .ok_or_else(|| BuildError::UnknownBranch {
                source_name: state.name.clone(),
                branch: branch.to_string(),
            })
    }
}

/// Builder for a source definition.
pub struct SourceBuilder<'a> {
    builder: &'a mut CatalogBuilder,
    name: String,
    versioned: bool,
    default_branch: String,
    ddl_unsupported: Option<String>,
    fail_refresh: bool,
    tables: Vec<(String, TableKind, Vec<Field>)>,
}

impl<'a> SourceBuilder<'a> {
    /// Mark the source as version-controlled.
    pub fn versioned(mut self) -> Self {
        self.versioned = true;
        self
    }

    /// Name of the default branch (`main` unless set).
    pub fn default_branch(mut self, name: impl Into<String>) -> Self {
        self.default_branch = name.into();
        self
    }

    /// Reject DDL on this source with the given explanation.
    pub fn ddl_unsupported(mut self, reason: impl Into<String>) -> Self {
        self.ddl_unsupported = Some(reason.into());
        self
    }

    /// Make every metadata refresh on this source fail.
    pub fn fail_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    /// Add a table, given its full dotted path.
    pub fn table(mut self, path: impl Into<String>, kind: TableKind, fields: Vec<Field>) -> Self {
        self.tables.push((path.into(), kind, fields));
        self
    }

    /// Finish building this source.
    pub fn done(self) -> Result<(), BuildError> {
        let key = self.name.to_lowercase();
        if self.builder.sources.contains_key(&key) {
            return Err(BuildError::DuplicateSource(self.name));
        }

        let mut snapshot = Snapshot::new();
        for (dotted, kind, fields) in self.tables {
            let path = CatalogPath::parse(&dotted)?;
            if !path.root().eq_ignore_ascii_case(&self.name) {
                return Err(BuildError::ForeignTable {
                    table: dotted,
                    source_name: self.name,
                });
            }
            let info = TableInfo::new(path.clone(), TableSchema::new(fields), kind);
            if snapshot.insert(table_key(&path), info).is_some() {
                return Err(BuildError::DuplicateTable(dotted));
            }
        }

        let mut state = SourceState {
            name: self.name,
            versioned: self.versioned,
            ddl_unsupported: self.ddl_unsupported,
            fail_refresh: self.fail_refresh,
            default_branch: self.default_branch,
            branches: BTreeMap::new(),
            tags: BTreeMap::new(),
            commits: HashMap::new(),
            tables: Snapshot::new(),
        };

        if state.versioned {
            let commit = commit_hash(self.builder.next_commit);
            self.builder.next_commit += 1;
            state.commits.insert(commit.clone(), snapshot);
            state.branches.insert(state.default_branch.clone(), commit);
        } else {
            state.tables = snapshot;
        }

        self.builder.sources.insert(key, state);
        Ok(())
    }
}
