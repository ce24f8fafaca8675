//! Catalog paths.
//!
//! A path names a table (or folder) as an ordered list of identifiers. The
//! first component is always the source the object lives in.

use std::fmt;
use thiserror::Error;

/// Errors raised while building a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A path must have at least one component.
    #[error("Catalog path cannot be empty")]
    Empty,

    /// Components must be non-blank.
    #[error("Catalog path component {index} is blank")]
    BlankComponent { index: usize },

    #[error("Unterminated quote in catalog path: {0}")]
    UnterminatedQuote(String),
}

/// An immutable, non-empty path into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogPath {
    components: Vec<String>,
}

impl CatalogPath {
    /// Build a path from its components.
    pub fn new<I, S>(components: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        if components.is_empty() {
            return Err(PathError::Empty);
        }
        if let Some(index) = components.iter().position(|c| c.trim().is_empty()) {
            return Err(PathError::BlankComponent { index });
        }
        Ok(Self { components })
    }

    /// Parse a dotted path such as `lake.sales.orders`.
    ///
    /// Double-quoted components may contain dots: `lake."2024.q1".orders`.
    pub fn parse(dotted: &str) -> Result<Self, PathError> {
        let mut components = Vec::new();
        let mut current = String::new();
        let mut quoted = false;
        for ch in dotted.chars() {
            match ch {
                '"' => quoted = !quoted,
                '.' if !quoted => components.push(std::mem::take(&mut current)),
                c => current.push(c),
            }
        }
        if quoted {
            return Err(PathError::UnterminatedQuote(dotted.to_string()));
        }
        components.push(current);
        Self::new(components)
    }

    /// The source name (first component).
    pub fn root(&self) -> &str {
        &self.components[0]
    }

    /// All components in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false: paths are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Prefix this path with a parent path.
    pub fn prefixed_with(&self, parent: &CatalogPath) -> CatalogPath {
        let mut components = parent.components.clone();
        components.extend(self.components.iter().cloned());
        CatalogPath { components }
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if component.contains('.') {
                write!(f, "\"{}\"", component)?;
            } else {
                f.write_str(component)?;
            }
        }
        Ok(())
    }
}
