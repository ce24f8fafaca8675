//! In-memory versioned catalog.

use branchline_core::{
    CatalogPath, CommandResult, ResolutionId, ResolvedVersion, TableInfo, TableKind,
    VersionReference,
};
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::{BranchInfo, Catalog};
use crate::error::{CatalogError, CatalogResult};
use crate::options::MutationOptions;

/// Tables keyed by lowercased path components.
pub(crate) type Snapshot = BTreeMap<Vec<String>, TableInfo>;

pub(crate) fn table_key(path: &CatalogPath) -> Vec<String> {
    path.components().iter().map(|c| c.to_lowercase()).collect()
}

pub(crate) fn commit_hash(seq: u64) -> String {
    format!("{:016x}", seq.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// State of one source.
#[derive(Debug, Clone)]
pub(crate) struct SourceState {
    pub(crate) name: String,
    pub(crate) versioned: bool,
    pub(crate) ddl_unsupported: Option<String>,
    pub(crate) fail_refresh: bool,
    pub(crate) default_branch: String,
    /// Branch name -> head commit.
    pub(crate) branches: BTreeMap<String, String>,
    /// Tag name -> commit.
    pub(crate) tags: BTreeMap<String, String>,
    /// Commit -> tables at that commit.
    pub(crate) commits: HashMap<String, Snapshot>,
    /// Tables of an unversioned source.
    pub(crate) tables: Snapshot,
}

impl SourceState {
    fn commit_for(&self, reference: &VersionReference) -> CatalogResult<&str> {
        let found = match reference {
            VersionReference::Unspecified => self.branches.get(&self.default_branch),
            VersionReference::Branch(name) => self.branches.get(name),
            VersionReference::Tag(name) => self.tags.get(name),
            VersionReference::Commit(hash) => self.commits.get_key_value(hash).map(|(k, _)| k),
        };
        found
            .map(String::as_str)
            .ok_or_else(|| CatalogError::reference_not_found(&self.name, reference))
    }
}

/// A catalog kept entirely in memory. Versioned sources store a full table
/// snapshot per commit.
#[derive(Debug)]
pub struct InMemoryCatalog {
    /// Sources keyed by lowercased name.
    sources: RwLock<HashMap<String, SourceState>>,
    next_commit: AtomicU64,
    next_resolution: AtomicU64,
    mutation_calls: AtomicU64,
    refreshed: Mutex<Vec<CatalogPath>>,
}

impl InMemoryCatalog {
    pub(crate) fn new(sources: HashMap<String, SourceState>, next_commit: u64) -> Self {
        Self {
            sources: RwLock::new(sources),
            next_commit: AtomicU64::new(next_commit),
            next_resolution: AtomicU64::new(1),
            mutation_calls: AtomicU64::new(0),
            refreshed: Mutex::new(Vec::new()),
        }
    }

    /// Number of times a mutation entry point was invoked, failed or not.
    pub fn mutation_calls(&self) -> u64 {
        self.mutation_calls.load(Ordering::SeqCst)
    }

    /// Paths refreshed so far, in order.
    pub fn refreshed_paths(&self) -> Vec<CatalogPath> {
        self.refreshed.lock().clone()
    }

    /// Current head of a branch.
    pub fn branch_head(&self, source: &str, branch: &str) -> Option<String> {
        let sources = self.sources.read();
        sources
            .get(&source.to_lowercase())
            .and_then(|s| s.branches.get(branch).cloned())
    }

    fn next_commit_hash(&self) -> String {
        commit_hash(self.next_commit.fetch_add(1, Ordering::SeqCst))
    }
}

fn remove_column(
    tables: &mut Snapshot,
    path: &CatalogPath,
    column: &str,
) -> CatalogResult<()> {
    let table = tables
        .get_mut(&table_key(path))
        .ok_or_else(|| CatalogError::table_not_found(path))?;
    if !table.schema.contains_field(column) {
        return Err(CatalogError::column_not_found(path, column));
    }
    if table.schema.field_count() == 1 {
        return Err(CatalogError::LastColumn { path: path.clone() });
    }
    table.schema.remove_field(column);
    Ok(())
}

impl Catalog for InMemoryCatalog {
    fn resolve_single(
        &self,
        path: &CatalogPath,
        default_schema: Option<&CatalogPath>,
    ) -> CatalogPath {
        let sources = self.sources.read();
        if sources.contains_key(&path.root().to_lowercase()) {
            return path.clone();
        }
        match default_schema {
            Some(schema) => path.prefixed_with(schema),
            None => path.clone(),
        }
    }

    fn get_table_no_resolve(
        &self,
        path: &CatalogPath,
        version: &VersionReference,
    ) -> CatalogResult<Option<TableInfo>> {
        let sources = self.sources.read();
        let Some(source) = sources.get(&path.root().to_lowercase()) else {
            return Ok(None);
        };
        let key = table_key(path);
        if !source.versioned {
            return Ok(source.tables.get(&key).cloned());
        }
        let commit = source.commit_for(version)?;
        Ok(source
            .commits
            .get(commit)
            .and_then(|snapshot| snapshot.get(&key))
            .cloned())
    }

    fn check_ddl_support(&self, path: &CatalogPath, table: &TableInfo) -> CommandResult {
        let sources = self.sources.read();
        let Some(source) = sources.get(&path.root().to_lowercase()) else {
            return CommandResult::failed(format!("Source [{}] not found", path.root()));
        };
        if let Some(reason) = &source.ddl_unsupported {
            return CommandResult::failed(reason.clone());
        }
        if table.kind == TableKind::View {
            return CommandResult::failed(format!(
                "[{}] is a view. ALTER TABLE is only supported on tables",
                path
            ));
        }
        CommandResult::successful("")
    }

    fn supports_versioned_tables(&self, source: &str) -> bool {
        let sources = self.sources.read();
        sources
            .get(&source.to_lowercase())
            .map(|s| s.versioned)
            .unwrap_or(false)
    }

    fn resolve_version(
        &self,
        source: &str,
        reference: &VersionReference,
    ) -> CatalogResult<ResolvedVersion> {
        let sources = self.sources.read();
        let state = sources
            .get(&source.to_lowercase())
            .ok_or_else(|| CatalogError::source_not_found(source))?;
        if !state.versioned {
            return Err(CatalogError::not_versioned(source));
        }
        let commit = state.commit_for(reference)?.to_string();
        let id = ResolutionId::new(self.next_resolution.fetch_add(1, Ordering::SeqCst));
        let resolved = match reference {
            VersionReference::Unspecified => {
                ResolvedVersion::branch(state.default_branch.clone(), commit, id)
            }
            VersionReference::Branch(name) => ResolvedVersion::branch(name.clone(), commit, id),
            VersionReference::Tag(name) => ResolvedVersion::tag(name.clone(), commit, id),
            VersionReference::Commit(_) => ResolvedVersion::commit(commit, id),
        };
        log::debug!("Resolved {} in {} to {}", reference, state.name, resolved);
        Ok(resolved)
    }

    fn drop_column(
        &self,
        path: &CatalogPath,
        column: &str,
        options: &MutationOptions,
    ) -> CatalogResult<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);

        let mut sources = self.sources.write();
        let source = sources
            .get_mut(&path.root().to_lowercase())
            .ok_or_else(|| CatalogError::source_not_found(path.root()))?;

        if !source.versioned {
            remove_column(&mut source.tables, path, column)?;
            log::debug!("Dropped column {} from {}", column, path);
            return Ok(());
        }

        let version = options
            .resolved_version()
            .ok_or_else(|| CatalogError::MissingVersion {
                source_name: source.name.clone(),
            })?;
        let branch = match (version.is_branch(), version.name()) {
            (true, Some(name)) => name.to_string(),
            _ => {
                return Err(CatalogError::ReferenceNotMutable {
                    source_name: source.name.clone(),
                    reference: version.to_string(),
                })
            }
        };
        let head = source.branches.get(&branch).cloned().ok_or_else(|| {
            CatalogError::reference_not_found(&source.name, &VersionReference::Branch(branch.clone()))
        })?;
        if head != version.commit_hash() {
            return Err(CatalogError::head_moved(branch, version.commit_hash(), head));
        }

        let mut snapshot = source.commits.get(&head).cloned().unwrap_or_default();
        remove_column(&mut snapshot, path, column)?;

        let commit = self.next_commit_hash();
        source.commits.insert(commit.clone(), snapshot);
        source.branches.insert(branch.clone(), commit.clone());
        log::debug!(
            "Dropped column {} from {} on branch {} (commit {})",
            column,
            path,
            branch,
            commit
        );
        Ok(())
    }

    fn refresh_dataset(&self, path: &CatalogPath) -> CatalogResult<()> {
        let fail = {
            let sources = self.sources.read();
            sources
                .get(&path.root().to_lowercase())
                .map(|s| s.fail_refresh)
                .unwrap_or(false)
        };
        if fail {
            return Err(CatalogError::RefreshFailed {
                path: path.clone(),
                reason: "metadata refresh is unavailable for this source".to_string(),
            });
        }
        self.refreshed.lock().push(path.clone());
        Ok(())
    }

    fn list_branches(&self, source: &str) -> CatalogResult<Vec<BranchInfo>> {
        let sources = self.sources.read();
        let state = sources
            .get(&source.to_lowercase())
            .ok_or_else(|| CatalogError::source_not_found(source))?;
        if !state.versioned {
            return Err(CatalogError::not_versioned(source));
        }
        Ok(state
            .branches
            .iter()
            .map(|(name, head)| BranchInfo {
                name: name.clone(),
                commit_hash: head.clone(),
            })
            .collect())
    }
}
