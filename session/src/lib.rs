//! Branchline Session
//!
//! The entry point the surrounding system calls: `DdlEngine::execute` takes
//! a typed statement and the caller's session options and returns an
//! ordered list of command results.
//!
//! # Module Structure
//!
//! - `engine` - DdlEngine and its builder; statement dispatch
//! - `handlers/` - Core statement handlers (drop column)
//! - `config` - EngineConfig loaded from TOML
//! - `error` - Top-level error type and its classification

mod config;
mod engine;
mod error;
mod handlers;

pub use config::{ConfigError, EngineConfig, RefreshConfig};
pub use engine::{DdlEngine, EngineBuilder};
pub use error::{EngineError, EngineResult, ErrorKind, InternalError};
pub use handlers::DropColumnHandler;
