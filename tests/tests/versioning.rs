//! Version reference handling for DDL on versioned sources.

use branchline_tests::prelude::*;
use branchline_version::VersionError;
use pretty_assertions::assert_eq;

fn on(reference: VersionReference) -> SessionOptions {
    SessionOptions::new("alice").with_version("lake", reference)
}

#[test]
fn test_tag_reference_is_not_mutable() {
    // GIVEN a session pinned to tag v1
    let run = Scenario::new("tag_v1")
        .catalog(fixture::lakehouse())
        .session(on(VersionReference::tag("v1")))
        // WHEN
        .step("drop", drop_column("lake.orders", "name"), |a| {
            a.error_kind(ErrorKind::Version).error(
                "DDL and DML operations are only supported for branches - not on tags or commits. \
                 lake.orders is not a branch (tag v1)",
            )
        })
        .run()
        .unwrap();

    // THEN the rejection happened before the catalog was touched
    assert_eq!(run.catalog.mutation_calls(), 0);
    assert!(matches!(
        run.outcomes[0],
        Err(EngineError::Version(VersionError::NotMutable { .. }))
    ));
    assert_eq!(
        run.columns_at("lake.orders", &VersionReference::tag("v1")),
        vec!["id", "name", "amount"]
    );
}

#[test]
fn test_commit_reference_is_not_mutable() {
    // GIVEN a session pinned to main's current commit
    let catalog = fixture::lakehouse();
    let head = catalog.branch_head("lake", "main").unwrap();

    // WHEN
    let run = Scenario::new("commit")
        .catalog(catalog)
        .session(on(VersionReference::commit(head.clone())))
        .step("drop", drop_column("lake.orders", "name"), |a| {
            a.error_kind(ErrorKind::Version)
                .error(format!("(commit {})", head))
        })
        .run()
        .unwrap();

    // THEN
    assert_eq!(run.catalog.mutation_calls(), 0);
}

#[test]
fn test_unknown_branch_is_unresolvable() {
    let run = Scenario::new("unknown_branch")
        .catalog(fixture::lakehouse())
        .session(on(VersionReference::branch("nope")))
        .step("drop", drop_column("lake.orders", "name"), |a| {
            a.error_kind(ErrorKind::Version).error("not found in source [lake]")
        })
        .run()
        .unwrap();
    assert_eq!(run.catalog.mutation_calls(), 0);
    assert!(matches!(
        run.outcomes[0],
        Err(EngineError::Version(VersionError::Unresolvable { .. }))
    ));
}

#[test]
fn test_branch_mutation_leaves_other_references_alone() {
    // GIVEN a session on the dev branch
    let catalog = fixture::lakehouse();
    let main_before = catalog.branch_head("lake", "main");
    let dev_before = catalog.branch_head("lake", "dev");

    // WHEN a column is dropped on dev
    let run = Scenario::new("dev_branch")
        .catalog(catalog)
        .session(on(VersionReference::branch("dev")))
        .step("drop", drop_column("lake.orders", "amount"), |a| {
            a.succeeded("Column [amount] dropped")
        })
        .run()
        .unwrap();

    // THEN only dev moved
    assert_eq!(run.catalog.branch_head("lake", "main"), main_before);
    assert_ne!(run.catalog.branch_head("lake", "dev"), dev_before);
    assert_eq!(
        run.columns_at("lake.orders", &VersionReference::branch("dev")),
        vec!["id", "name"]
    );
    assert_eq!(run.columns("lake.orders"), vec!["id", "name", "amount"]);
    assert_eq!(
        run.columns_at("lake.orders", &VersionReference::tag("v1")),
        vec!["id", "name", "amount"]
    );
}

#[test]
fn test_versions_are_per_source() {
    // A tag pinned on `lake` has no effect on statements against `files`.
    let run = Scenario::new("per_source")
        .catalog(fixture::lakehouse())
        .session(on(VersionReference::tag("v1")))
        .step("drop_files", drop_column("files.events", "ts"), |a| {
            a.succeeded("Column [ts] dropped")
        })
        .run()
        .unwrap();
    assert_eq!(run.catalog.mutation_calls(), 1);
}

#[test]
fn test_source_key_is_case_insensitive() {
    let session = SessionOptions::new("alice").with_version("LAKE", VersionReference::tag("v1"));
    Scenario::new("upper_source")
        .catalog(fixture::lakehouse())
        .session(session)
        .step("drop", drop_column("lake.orders", "name"), |a| {
            a.error_kind(ErrorKind::Version)
        })
        .run()
        .unwrap();
}

mod concurrent_writes {
    use super::*;
    use pretty_assertions::assert_eq;
    use branchline_catalog::{
        BranchInfo, Catalog, CatalogResult, InMemoryCatalog, MutationOptions,
    };
    use branchline_core::{ResolvedVersion, TableInfo};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Commits a competing column drop on the same branch right before the
    /// first mutation it forwards.
    struct CompetingWriter {
        inner: Arc<InMemoryCatalog>,
        column: &'static str,
        fired: AtomicBool,
    }

    impl Catalog for CompetingWriter {
        fn resolve_single(
            &self,
            path: &CatalogPath,
            default_schema: Option<&CatalogPath>,
        ) -> CatalogPath {
            self.inner.resolve_single(path, default_schema)
        }

        fn get_table_no_resolve(
            &self,
            path: &CatalogPath,
            version: &VersionReference,
        ) -> CatalogResult<Option<TableInfo>> {
            self.inner.get_table_no_resolve(path, version)
        }

        fn check_ddl_support(&self, path: &CatalogPath, table: &TableInfo) -> CommandResult {
            self.inner.check_ddl_support(path, table)
        }

        fn supports_versioned_tables(&self, source: &str) -> bool {
            self.inner.supports_versioned_tables(source)
        }

        fn resolve_version(
            &self,
            source: &str,
            reference: &VersionReference,
        ) -> CatalogResult<ResolvedVersion> {
            self.inner.resolve_version(source, reference)
        }

        fn drop_column(
            &self,
            path: &CatalogPath,
            column: &str,
            options: &MutationOptions,
        ) -> CatalogResult<()> {
            if !self.fired.swap(true, Ordering::SeqCst) {
                let branch = options
                    .resolved_version()
                    .and_then(|v| v.name())
                    .unwrap_or("main")
                    .to_string();
                let fresh = self
                    .inner
                    .resolve_version(path.root(), &VersionReference::branch(branch))?;
                let competing = MutationOptions::builder()
                    .resolved_version(Some(fresh))
                    .build();
                self.inner.drop_column(path, self.column, &competing)?;
            }
            self.inner.drop_column(path, column, options)
        }

        fn refresh_dataset(&self, path: &CatalogPath) -> CatalogResult<()> {
            self.inner.refresh_dataset(path)
        }

        fn list_branches(&self, source: &str) -> CatalogResult<Vec<BranchInfo>> {
            self.inner.list_branches(source)
        }
    }

    #[test]
    fn test_branch_moved_since_resolution_is_a_version_conflict() {
        // GIVEN a writer that advances main between resolution and mutation
        init_logging();
        let inner = fixture::lakehouse();
        let catalog = Arc::new(CompetingWriter {
            inner: inner.clone(),
            column: "amount",
            fired: AtomicBool::new(false),
        });
        let engine = DdlEngine::new(catalog, EngineConfig::default());

        // WHEN
        let err = engine
            .execute(
                "ALTER TABLE lake.orders DROP COLUMN name",
                &drop_column("lake.orders", "name"),
                &SessionOptions::new("alice"),
            )
            .unwrap_err();

        // THEN the statement is rejected as a user-facing conflict
        assert_eq!(err.kind(), ErrorKind::Version);
        assert!(matches!(
            err,
            EngineError::Version(VersionError::BranchMoved { .. })
        ));
        assert!(err.to_string().contains("modified concurrently"));

        // and only the competing write landed
        let table = inner
            .get_table_no_resolve(
                &CatalogPath::parse("lake.orders").unwrap(),
                &VersionReference::Unspecified,
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            table.schema.field_names().collect::<Vec<_>>(),
            vec!["id", "name"]
        );
    }
}
