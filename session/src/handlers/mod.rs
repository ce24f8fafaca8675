//! Core statement handlers, available in every edition.

mod drop_column;

pub use drop_column::DropColumnHandler;
