//! Mutation operation implementations.
//!
//! Each operation is implemented in its own module and calls exactly one
//! catalog mutation entry point.

mod drop_column;

pub use drop_column::execute_drop_column;
