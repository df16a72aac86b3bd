//! Version-control collaborators
//!
//! Release inference never talks to a repository directly; it goes through
//! two narrow traits. [CommitLog] supplies the ordered commit history since
//! a release, and [VersionSource] supplies the (current, previous) version
//! pair inferred for the build. Hosts that already hold both version strings
//! can pass an [InferredVersion] directly; anything fancier (delayed version
//! objects, tag scanning) stays behind the trait.
//!
//! Implementations:
//!
//! - [repository::GitCommitLog]: real history access via the `git2` crate
//! - [mock::MockCommitLog]: scripted history for testing

pub mod mock;
pub mod repository;

pub use mock::MockCommitLog;
pub use repository::GitCommitLog;

use crate::error::Result;

/// A single commit as reported by a commit log provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit id
    pub id: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author: String,
    /// Commit time, seconds since the Unix epoch
    pub timestamp: i64,
}

impl CommitRecord {
    /// First line of the commit message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated commit id (first 7 characters)
    pub fn short_id(&self) -> &str {
        if self.id.len() > 7 {
            &self.id[..7]
        } else {
            &self.id
        }
    }
}

/// Ordered commit history access
///
/// Implementors must be `Send + Sync` so an inference can be shared across
/// build workers. The returned ordering is defined by the underlying VCS and
/// must be deterministic for a fixed repository state; callers never reorder.
pub trait CommitLog: Send + Sync {
    /// Commits strictly after the release identified by `version`, up to the
    /// current state, oldest first
    ///
    /// # Errors
    /// [crate::ReleaseError::ChangeLogUnavailable] when `version` cannot be
    /// resolved in history.
    fn commits_since(&self, version: &str) -> Result<Vec<CommitRecord>>;
}

/// The version pair inferred for the current build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredVersion {
    /// Version of the current build
    pub current: String,
    /// Most recent release version preceding it
    pub previous: String,
}

impl InferredVersion {
    pub fn new(current: impl Into<String>, previous: impl Into<String>) -> Self {
        InferredVersion {
            current: current.into(),
            previous: previous.into(),
        }
    }
}

/// Source of the inferred version pair
///
/// Abstracts however the host computes versions (tag scanning, build state,
/// configuration); the core only ever sees the resulting pair.
pub trait VersionSource: Send + Sync {
    fn inferred_version(&self) -> Result<InferredVersion>;
}

/// A fixed pair is its own source
impl VersionSource for InferredVersion {
    fn inferred_version(&self) -> Result<InferredVersion> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record_subject() {
        let record = CommitRecord {
            id: "0123456789abcdef".to_string(),
            message: "feat: add thing\n\nlonger body\n".to_string(),
            author: "Alice".to_string(),
            timestamp: 0,
        };
        assert_eq!(record.subject(), "feat: add thing");
        assert_eq!(record.short_id(), "0123456");
    }

    #[test]
    fn test_short_id_of_short_hash() {
        let record = CommitRecord {
            id: "abc".to_string(),
            message: String::new(),
            author: String::new(),
            timestamp: 0,
        };
        assert_eq!(record.short_id(), "abc");
        assert_eq!(record.subject(), "");
    }

    #[test]
    fn test_inferred_version_is_its_own_source() {
        let pair = InferredVersion::new("1.1.0", "1.0.0");
        assert_eq!(pair.inferred_version().unwrap(), pair);
    }
}
