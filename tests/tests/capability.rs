//! Statement dispatch across editions.

use branchline_capability::{ConstructionError, UnsupportedError};
use branchline_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_core_edition_reports_show_branches_unsupported() {
    // GIVEN an engine with only the core handlers
    let run = Scenario::new("core_only")
        .catalog(fixture::lakehouse())
        .core_only()
        // WHEN
        .step("show", show_branches(Some("lake")), |a| {
            a.error_kind(ErrorKind::Unsupported)
                .error("SHOW BRANCHES action is not supported.")
        })
        // core statements still work
        .step("drop", drop_column("files.events", "ts"), |a| a.count(1))
        .run()
        .unwrap();

    // THEN
    assert_eq!(
        run.outcomes[0],
        Err(EngineError::Unsupported(UnsupportedError {
            kind: StatementKind::ShowBranches
        }))
    );
    assert!(!run.engine.supports(StatementKind::ShowBranches));
    assert!(run.engine.supports(StatementKind::DropColumn));
}

#[test]
fn test_extended_edition_lists_branches() {
    // GIVEN
    let catalog = fixture::lakehouse();
    let dev = catalog.branch_head("lake", "dev").unwrap();
    let main = catalog.branch_head("lake", "main").unwrap();

    // WHEN
    let run = Scenario::new("show_branches")
        .catalog(catalog)
        .step("show", show_branches(Some("lake")), |a| {
            a.results(vec![
                CommandResult::successful(format!("dev {}", dev)),
                CommandResult::successful(format!("main {}", main)),
            ])
        })
        .run()
        .unwrap();

    // THEN
    assert!(run.engine.supports(StatementKind::ShowBranches));
}

#[test]
fn test_show_branches_sees_new_heads() {
    let run = Scenario::new("show_after_drop")
        .catalog(fixture::lakehouse())
        .session(SessionOptions::new("alice").with_version("lake", VersionReference::branch("dev")))
        .step("drop", drop_column("lake.orders", "amount"), |a| a.count(1))
        .step("show", show_branches(Some("lake")), |a| a.count(2))
        .run()
        .unwrap();
    let dev = run.catalog.branch_head("lake", "dev").unwrap();
    assert!(matches!(
        &run.outcomes[1],
        Ok(results) if results[0] == CommandResult::successful(format!("dev {}", dev))
    ));
}

#[test]
fn test_show_branches_source_from_default_schema() {
    Scenario::new("show_default_schema")
        .catalog(fixture::lakehouse())
        .session(SessionOptions::new("alice").with_default_schema(CatalogPath::parse("lake").unwrap()))
        .step("show", show_branches(None), |a| a.count(2))
        .run()
        .unwrap();
}

#[test]
fn test_show_branches_user_errors() {
    Scenario::new("show_errors")
        .catalog(fixture::lakehouse())
        .step("no_source", show_branches(None), |a| {
            a.error_kind(ErrorKind::Validation).error("No source specified")
        })
        .step("plain_source", show_branches(Some("files")), |a| {
            a.error_kind(ErrorKind::Validation)
                .error("Source [files] does not support versioning")
        })
        .step("unknown_source", show_branches(Some("nope")), |a| {
            a.error_kind(ErrorKind::Validation)
                .error("Source [nope] not found")
        })
        .run()
        .unwrap();
}

#[test]
fn test_broken_capability_is_internal() {
    // GIVEN an engine whose SHOW BRANCHES handler cannot be built
    let shared: Arc<dyn branchline_catalog::Catalog> = fixture::lakehouse();
    let mut engine = DdlEngine::new(shared, EngineConfig::default());
    engine
        .registry_mut()
        .register(StatementKind::ShowBranches, |_ctx| {
            Err(ConstructionError::new(
                StatementKind::ShowBranches,
                "plugin failed to load",
            ))
        });

    // WHEN
    let err = engine
        .execute(
            "SHOW BRANCHES IN lake",
            &show_branches(Some("lake")),
            &SessionOptions::new("alice"),
        )
        .unwrap_err();

    // THEN it is not reported as unsupported
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(!err.is_user_error());
    assert!(err.to_string().contains("plugin failed to load"));
}
