//! Command results returned to the surrounding system.

use std::fmt;

/// Outcome of one direct (non-query) command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub ok: bool,
    pub summary: String,
}

impl CommandResult {
    /// A successful result.
    pub fn successful(summary: impl Into<String>) -> Self {
        Self {
            ok: true,
            summary: summary.into(),
        }
    }

    /// A failed result carrying an explanation.
    pub fn failed(summary: impl Into<String>) -> Self {
        Self {
            ok: false,
            summary: summary.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.ok { "ok" } else { "failed" };
        write!(f, "[{}] {}", status, self.summary)
    }
}
