//! Version references and resolved version handles.
//!
//! A `VersionReference` is what a user asks for (possibly nothing at all).
//! A `ResolvedVersion` is what the catalog answered at one point in time.

use std::fmt;

/// A symbolic version reference, scoped to a single source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VersionReference {
    /// No reference set; resolves to the source's default branch.
    #[default]
    Unspecified,
    /// A named branch.
    Branch(String),
    /// A named tag.
    Tag(String),
    /// A raw commit hash.
    Commit(String),
}

impl VersionReference {
    pub fn branch(name: impl Into<String>) -> Self {
        Self::Branch(name.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub fn commit(hash: impl Into<String>) -> Self {
        Self::Commit(hash.into())
    }
}

impl fmt::Display for VersionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionReference::Unspecified => write!(f, "default branch"),
            VersionReference::Branch(name) => write!(f, "branch {}", name),
            VersionReference::Tag(name) => write!(f, "tag {}", name),
            VersionReference::Commit(hash) => write!(f, "commit {}", hash),
        }
    }
}

/// The kind of reference a resolution landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionKind {
    Branch,
    Tag,
    Commit,
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionKind::Branch => write!(f, "branch"),
            VersionKind::Tag => write!(f, "tag"),
            VersionKind::Commit => write!(f, "commit"),
        }
    }
}

/// Identity of a single resolution. Assigned by the catalog, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolutionId(pub u64);

impl ResolutionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A concrete version handle produced by resolving a `VersionReference`.
///
/// Two handles compare equal only if they come from the same resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedVersion {
    kind: VersionKind,
    name: Option<String>,
    commit_hash: String,
    resolution_id: ResolutionId,
}

impl ResolvedVersion {
    /// A resolved branch head.
    pub fn branch(
        name: impl Into<String>,
        commit_hash: impl Into<String>,
        resolution_id: ResolutionId,
    ) -> Self {
        Self {
            kind: VersionKind::Branch,
            name: Some(name.into()),
            commit_hash: commit_hash.into(),
            resolution_id,
        }
    }

    /// A resolved tag.
    pub fn tag(
        name: impl Into<String>,
        commit_hash: impl Into<String>,
        resolution_id: ResolutionId,
    ) -> Self {
        Self {
            kind: VersionKind::Tag,
            name: Some(name.into()),
            commit_hash: commit_hash.into(),
            resolution_id,
        }
    }

    /// A bare commit.
    pub fn commit(commit_hash: impl Into<String>, resolution_id: ResolutionId) -> Self {
        Self {
            kind: VersionKind::Commit,
            name: None,
            commit_hash: commit_hash.into(),
            resolution_id,
        }
    }

    pub fn kind(&self) -> VersionKind {
        self.kind
    }

    /// Branch or tag name; `None` for bare commits.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    pub fn resolution_id(&self) -> ResolutionId {
        self.resolution_id
    }

    pub fn is_branch(&self) -> bool {
        self.kind == VersionKind::Branch
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {} at {}", self.kind, name, self.commit_hash),
            None => write!(f, "{} {}", self.kind, self.commit_hash),
        }
    }
}
