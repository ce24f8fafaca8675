//! Branchline Core Types
//!
//! This crate provides the foundational types shared by every stage of the
//! DDL pipeline:
//! - Catalog paths (CatalogPath)
//! - Version references and resolved version handles
//! - Table schemas, fields and table provenance (TableKind)
//! - Command results returned to the surrounding system
//! - The typed statement AST produced by the parser
//! - Session options (per-source version references)

pub mod messages;
mod path;
mod result;
mod schema;
mod session;
mod statement;
mod version;

pub use path::*;
pub use result::*;
pub use schema::*;
pub use session::*;
pub use statement::*;
pub use version::*;
