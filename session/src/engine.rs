//! DdlEngine - statement dispatch through the capability registry.

use branchline_capability::{CapabilityRegistry, ExecutionContext};
use branchline_catalog::Catalog;
use branchline_core::{CommandResult, SessionOptions, Statement, StatementKind};
use branchline_mutation::{LogRefreshObserver, RefreshHandle, RefreshObserver, RefreshScheduler};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, ErrorKind};
use crate::handlers::DropColumnHandler;

/// Background refreshes that have not been waited on yet.
///
/// Finished handles are released each time a new one is tracked, so the
/// list only holds refreshes still running.
#[derive(Debug, Default)]
pub(crate) struct PendingRefreshes {
    handles: Mutex<Vec<RefreshHandle>>,
    failed: AtomicUsize,
}

impl PendingRefreshes {
    pub(crate) fn track(&self, handle: RefreshHandle) {
        let mut handles = self.handles.lock();
        let (finished, running): (Vec<_>, Vec<_>) =
            handles.drain(..).partition(RefreshHandle::is_finished);
        *handles = running;
        let failures = finished.into_iter().map(RefreshHandle::wait).filter(|ok| !ok).count();
        if failures > 0 {
            log::debug!("Released {} failed background refreshes", failures);
            self.failed.fetch_add(failures, Ordering::SeqCst);
        }
        handles.push(handle);
    }

    fn len(&self) -> usize {
        self.handles.lock().len()
    }

    /// Join everything still tracked. Returns failures since the last drain.
    fn drain(&self) -> usize {
        let handles: Vec<RefreshHandle> = std::mem::take(&mut *self.handles.lock());
        let failures = handles.into_iter().map(RefreshHandle::wait).filter(|ok| !ok).count();
        failures + self.failed.swap(0, Ordering::SeqCst)
    }
}

/// Builder for a `DdlEngine`.
pub struct EngineBuilder {
    catalog: Arc<dyn Catalog>,
    config: EngineConfig,
    observer: Arc<dyn RefreshObserver>,
    #[cfg_attr(not(feature = "extension"), allow(dead_code))]
    extensions: bool,
}

impl EngineBuilder {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
            observer: Arc::new(LogRefreshObserver),
            extensions: cfg!(feature = "extension"),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Receive the outcome of every post-mutation refresh.
    pub fn observer(mut self, observer: Arc<dyn RefreshObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Register only the core handlers, even when extensions are compiled in.
    pub fn without_extensions(mut self) -> Self {
        self.extensions = false;
        self
    }

    pub fn build(self) -> DdlEngine {
        let scheduler = Arc::new(
            RefreshScheduler::new(
                Arc::clone(&self.catalog),
                self.observer,
                self.config.refresh.mode,
            )
            .with_thread_name(self.config.refresh.thread_name.clone()),
        );
        let pending = Arc::new(PendingRefreshes::default());

        let mut registry = CapabilityRegistry::new();
        let handler_pending = Arc::clone(&pending);
        registry.register(StatementKind::DropColumn, move |ctx| {
            let handler =
                DropColumnHandler::new(ctx, Arc::clone(&scheduler), Arc::clone(&handler_pending))?;
            Ok(Box::new(handler))
        });

        #[cfg(feature = "extension")]
        {
            if self.extensions {
                branchline_extension::register(&mut registry);
            }
        }

        log::debug!(
            "DDL engine ready with handlers: {:?}",
            registry.registered_names()
        );

        DdlEngine {
            catalog: self.catalog,
            config: self.config,
            registry,
            pending,
        }
    }
}

/// Executes DDL statements against a catalog.
pub struct DdlEngine {
    catalog: Arc<dyn Catalog>,
    config: EngineConfig,
    registry: CapabilityRegistry,
    pending: Arc<PendingRefreshes>,
}

impl DdlEngine {
    /// Engine with the handlers of this build and the given configuration.
    pub fn new(catalog: Arc<dyn Catalog>, config: EngineConfig) -> Self {
        Self::builder(catalog).config(config).build()
    }

    pub fn builder(catalog: Arc<dyn Catalog>) -> EngineBuilder {
        EngineBuilder::new(catalog)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registry access for embedders adding their own handlers.
    pub fn registry_mut(&mut self) -> &mut CapabilityRegistry {
        &mut self.registry
    }

    /// Returns true if statements of `kind` can be executed.
    pub fn supports(&self, kind: StatementKind) -> bool {
        self.registry.contains(kind)
    }

    /// Execute one statement for the given session.
    ///
    /// On success the result list is never empty. `sql` is the statement
    /// text as submitted and is only used for logging.
    pub fn execute(
        &self,
        sql: &str,
        statement: &Statement,
        session: &SessionOptions,
    ) -> EngineResult<Vec<CommandResult>> {
        let kind = statement.kind();
        log::info!("Executing {} for user {}", kind, session.user());

        let context = ExecutionContext::new(Arc::clone(&self.catalog), session.clone())
            .with_ddl_enabled(self.config.ddl_enabled);

        let outcome = self
            .registry
            .dispatch(kind, &context)
            .map_err(EngineError::from)
            .and_then(|handler| {
                handler
                    .to_result(sql, statement)
                    .map_err(EngineError::from)
            });

        match &outcome {
            Ok(results) => {
                debug_assert!(!results.is_empty());
                for result in results {
                    if result.ok {
                        log::info!("{}: {}", kind, result.summary);
                    } else {
                        log::warn!("{} refused: {}", kind, result.summary);
                    }
                }
            }
            Err(err) => match err.kind() {
                ErrorKind::Internal => log::error!("{} failed: {}", kind, err),
                _ => log::warn!("{} rejected: {}", kind, err),
            },
        }
        outcome
    }

    /// Block until every background refresh started so far has finished.
    /// Returns how many of them failed.
    pub fn wait_for_refreshes(&self) -> usize {
        self.pending.drain()
    }

    /// Background refreshes currently tracked.
    pub fn pending_refreshes(&self) -> usize {
        self.pending.len()
    }
}
