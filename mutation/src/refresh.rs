//! Post-mutation metadata refresh.
//!
//! After a successful mutation the decider looks at the table's provenance.
//! Tables that carry their own authoritative metadata, and tables in
//! natively versioned sources, need nothing. Everything else gets its cached
//! dataset metadata re-derived so readers see the new schema.
//!
//! A refresh never changes the result of the statement that triggered it.
//! Failures go to a `RefreshObserver`.

use branchline_catalog::{Catalog, CatalogError};
use branchline_core::{CatalogPath, TableInfo, TableKind};
use serde::Deserialize;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// What to do once a mutation has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshAction {
    None,
    RefreshDataset(CatalogPath),
}

/// Decides whether a mutated table needs a metadata refresh.
pub struct RefreshDecider;

impl RefreshDecider {
    /// Decide for `table` at `path`, asking the catalog about the source.
    pub fn decide(catalog: &dyn Catalog, table: &TableInfo, path: &CatalogPath) -> RefreshAction {
        Self::decide_for(
            table.kind,
            catalog.supports_versioned_tables(path.root()),
            path,
        )
    }

    /// The decision rule itself, as a pure function.
    pub fn decide_for(kind: TableKind, source_versioned: bool, path: &CatalogPath) -> RefreshAction {
        if kind.is_self_describing() || source_versioned {
            RefreshAction::None
        } else {
            RefreshAction::RefreshDataset(path.clone())
        }
    }
}

/// Whether a scheduled refresh runs before the statement returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    #[default]
    Synchronous,
    Asynchronous,
}

/// Receives refresh outcomes.
pub trait RefreshObserver: Send + Sync {
    fn on_refreshed(&self, _path: &CatalogPath) {}

    fn on_refresh_failed(&self, path: &CatalogPath, error: &CatalogError);
}

/// Observer that only logs.
#[derive(Debug, Default)]
pub struct LogRefreshObserver;

impl RefreshObserver for LogRefreshObserver {
    fn on_refreshed(&self, path: &CatalogPath) {
        log::debug!("Refreshed dataset metadata for {}", path);
    }

    fn on_refresh_failed(&self, path: &CatalogPath, error: &CatalogError) {
        log::warn!("Dataset metadata refresh for {} failed: {}", path, error);
    }
}

/// Handle on a scheduled refresh.
#[derive(Debug)]
pub enum RefreshHandle {
    /// Nothing was scheduled.
    Skipped,
    /// The refresh ran inline; `true` if it succeeded.
    Completed(bool),
    /// The refresh is running on a background thread.
    Pending(JoinHandle<bool>),
}

impl RefreshHandle {
    /// Block until the refresh is finished. Returns `true` if it succeeded
    /// or nothing needed to run.
    pub fn wait(self) -> bool {
        match self {
            RefreshHandle::Skipped => true,
            RefreshHandle::Completed(ok) => ok,
            RefreshHandle::Pending(handle) => handle.join().unwrap_or(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RefreshHandle::Pending(_))
    }

    /// Returns true once `wait` would no longer block.
    pub fn is_finished(&self) -> bool {
        match self {
            RefreshHandle::Pending(handle) => handle.is_finished(),
            _ => true,
        }
    }
}

/// Runs refresh actions according to the configured `RefreshMode`.
pub struct RefreshScheduler {
    catalog: Arc<dyn Catalog>,
    observer: Arc<dyn RefreshObserver>,
    mode: RefreshMode,
    thread_name: String,
}

impl RefreshScheduler {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        observer: Arc<dyn RefreshObserver>,
        mode: RefreshMode,
    ) -> Self {
        Self {
            catalog,
            observer,
            mode,
            thread_name: "branchline-refresh".to_string(),
        }
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Schedule `action`. Never fails: refresh errors go to the observer.
    pub fn schedule(&self, action: RefreshAction) -> RefreshHandle {
        let path = match action {
            RefreshAction::None => return RefreshHandle::Skipped,
            RefreshAction::RefreshDataset(path) => path,
        };

        match self.mode {
            RefreshMode::Synchronous => RefreshHandle::Completed(run_refresh(
                self.catalog.as_ref(),
                self.observer.as_ref(),
                &path,
            )),
            RefreshMode::Asynchronous => {
                let catalog = Arc::clone(&self.catalog);
                let observer = Arc::clone(&self.observer);
                let background_path = path.clone();
                let spawned = thread::Builder::new()
                    .name(self.thread_name.clone())
                    .spawn(move || {
                        run_refresh(catalog.as_ref(), observer.as_ref(), &background_path)
                    });
                match spawned {
                    Ok(handle) => RefreshHandle::Pending(handle),
                    Err(err) => {
                        log::error!(
                            "Could not start background refresh for {} ({}); running inline",
                            path,
                            err
                        );
                        RefreshHandle::Completed(run_refresh(
                            self.catalog.as_ref(),
                            self.observer.as_ref(),
                            &path,
                        ))
                    }
                }
            }
        }
    }
}

fn run_refresh(catalog: &dyn Catalog, observer: &dyn RefreshObserver, path: &CatalogPath) -> bool {
    match catalog.refresh_dataset(path) {
        Ok(()) => {
            observer.on_refreshed(path);
            true
        }
        Err(err) => {
            observer.on_refresh_failed(path, &err);
            false
        }
    }
}
