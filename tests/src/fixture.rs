//! Shared catalogs and observers.

use branchline_catalog::{CatalogBuilder, CatalogError, InMemoryCatalog};
use branchline_core::{CatalogPath, DataType, Field, TableKind};
use branchline_mutation::RefreshObserver;
use parking_lot::Mutex;
use std::sync::Arc;

pub const LEGACY_DDL_REASON: &str = "Source [legacy] does not support ALTER TABLE";

fn fields(names: &[(&str, DataType)]) -> Vec<Field> {
    names
        .iter()
        .map(|(name, data_type)| Field::new(*name, data_type.clone()))
        .collect()
}

/// A catalog with one source of every flavour.
///
/// - `lake`: versioned, branches `main` and `dev`, tag `v1` on main
/// - `files`: unversioned, one table per table kind
/// - `legacy`: refuses DDL
/// - `flaky`: every metadata refresh fails
pub fn lakehouse() -> Arc<InMemoryCatalog> {
    let mut builder = CatalogBuilder::new();

    builder
        .add_source("lake")
        .versioned()
        .table(
            "lake.orders",
            TableKind::VersionedIceberg,
            fields(&[
                ("id", DataType::BigInt),
                ("name", DataType::Varchar),
                ("amount", DataType::Double),
            ]),
        )
        .table(
            "lake.sales.single",
            TableKind::VersionedIceberg,
            fields(&[("id", DataType::Int)]),
        )
        .done()
        .expect("lake source");
    builder.add_tag("lake", "v1", "main").expect("tag v1");
    builder.add_branch("lake", "dev", "main").expect("branch dev");

    builder
        .add_source("files")
        .table(
            "files.events",
            TableKind::ExternalFormat,
            fields(&[
                ("id", DataType::Int),
                ("name", DataType::Varchar),
                ("ts", DataType::Timestamp),
            ]),
        )
        .table(
            "files.single",
            TableKind::ExternalFormat,
            fields(&[("id", DataType::Int)]),
        )
        .table(
            "files.logs",
            TableKind::JsonFile,
            fields(&[("id", DataType::Int), ("msg", DataType::Varchar)]),
        )
        .table(
            "files.managed",
            TableKind::InternalIceberg,
            fields(&[("id", DataType::Int), ("name", DataType::Varchar)]),
        )
        .table(
            "files.report",
            TableKind::View,
            fields(&[("id", DataType::Int), ("total", DataType::Double)]),
        )
        .done()
        .expect("files source");

    builder
        .add_source("legacy")
        .ddl_unsupported(LEGACY_DDL_REASON)
        .table(
            "legacy.accounts",
            TableKind::ExternalFormat,
            fields(&[("id", DataType::Int), ("name", DataType::Varchar)]),
        )
        .done()
        .expect("legacy source");

    builder
        .add_source("flaky")
        .fail_refresh()
        .table(
            "flaky.feed",
            TableKind::ExternalFormat,
            fields(&[("id", DataType::Int), ("payload", DataType::Varchar)]),
        )
        .done()
        .expect("flaky source");

    Arc::new(builder.build())
}

/// Records every refresh outcome it is told about.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    refreshed: Mutex<Vec<CatalogPath>>,
    failed: Mutex<Vec<CatalogPath>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn refreshed(&self) -> Vec<CatalogPath> {
        self.refreshed.lock().clone()
    }

    pub fn failed(&self) -> Vec<CatalogPath> {
        self.failed.lock().clone()
    }
}

impl RefreshObserver for RecordingObserver {
    fn on_refreshed(&self, path: &CatalogPath) {
        self.refreshed.lock().push(path.clone());
    }

    fn on_refresh_failed(&self, path: &CatalogPath, error: &CatalogError) {
        log::debug!("refresh of {} failed: {}", path, error);
        self.failed.lock().push(path.clone());
    }
}
