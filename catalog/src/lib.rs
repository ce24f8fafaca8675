//! Branchline Catalog
//!
//! The catalog interface the DDL pipeline consumes, plus an in-memory
//! implementation with branches, tags and commits.
//!
//! # Module Structure
//!
//! - `catalog` - The `Catalog` trait every backing catalog implements
//! - `options` - Immutable `MutationOptions` passed to mutation calls
//! - `memory` - `InMemoryCatalog`, a versioned catalog kept in memory
//! - `builder` - `CatalogBuilder` for constructing an `InMemoryCatalog`
//! - `error` - Error types for catalog failures

mod builder;
mod catalog;
mod error;
mod memory;
mod options;

pub use builder::{BuildError, CatalogBuilder, SourceBuilder};
pub use catalog::{BranchInfo, Catalog};
pub use error::{CatalogError, CatalogResult};
pub use memory::InMemoryCatalog;
pub use options::{MutationOptions, MutationOptionsBuilder};
