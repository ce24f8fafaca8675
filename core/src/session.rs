//! Session options consumed by the pipeline.

use crate::{CatalogPath, VersionReference};
use std::collections::HashMap;

/// Per-session state the pipeline reads: the version reference chosen for
/// each source and the default schema used to qualify relative paths.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    user: String,
    default_schema: Option<CatalogPath>,
    versions: HashMap<String, VersionReference>,
}

impl SessionOptions {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Default::default()
        }
    }

    pub fn with_default_schema(mut self, schema: CatalogPath) -> Self {
        self.default_schema = Some(schema);
        self
    }

    /// Set the version reference for a source (`USE BRANCH x IN source`).
    pub fn with_version(mut self, source: impl Into<String>, version: VersionReference) -> Self {
        self.set_version(source, version);
        self
    }

    pub fn set_version(&mut self, source: impl Into<String>, version: VersionReference) {
        self.versions.insert(source.into().to_lowercase(), version);
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn default_schema(&self) -> Option<&CatalogPath> {
        self.default_schema.as_ref()
    }

    /// The reference set for a source; `Unspecified` when none was set.
    /// Source names compare case-insensitively.
    pub fn version_for_source(&self, source: &str) -> VersionReference {
        self.versions
            .get(&source.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
