use crate::error::{ReleaseError, Result};
use crate::vcs::{CommitLog, CommitRecord};

/// Mock commit log for testing without a real repository
///
/// Commits are returned in insertion order; only versions registered with
/// [MockCommitLog::add_release] resolve.
#[derive(Default)]
pub struct MockCommitLog {
    releases: Vec<String>,
    commits: Vec<CommitRecord>,
}

impl MockCommitLog {
    /// Create a new empty mock commit log
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a version as resolvable in history
    pub fn add_release(&mut self, version: impl Into<String>) {
        self.releases.push(version.into());
    }

    /// Add a commit to the history since the last release
    pub fn add_commit(
        &mut self,
        id: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
    ) {
        let timestamp = 1_700_000_000 + self.commits.len() as i64;
        self.commits.push(CommitRecord {
            id: id.into(),
            message: message.into(),
            author: author.into(),
            timestamp,
        });
    }
}

impl CommitLog for MockCommitLog {
    fn commits_since(&self, version: &str) -> Result<Vec<CommitRecord>> {
        if !self.releases.iter().any(|v| v == version) {
            return Err(ReleaseError::changelog_unavailable(format!(
                "previous release '{}' not found in history",
                version
            )));
        }

        Ok(self.commits.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_commit_log_basic() {
        let mut log = MockCommitLog::new();
        log.add_release("1.0.0");
        log.add_commit("abc123", "feat: add thing", "Alice");
        log.add_commit("def456", "fix: repair thing", "Bob");

        let commits = log.commits_since("1.0.0").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].id, "abc123");
        assert_eq!(commits[1].author, "Bob");
    }

    #[test]
    fn test_mock_commit_log_unknown_version() {
        let log = MockCommitLog::new();
        let err = log.commits_since("9.9.9").unwrap_err();
        assert!(matches!(err, ReleaseError::ChangeLogUnavailable(_)));
    }

    #[test]
    fn test_mock_commit_log_timestamps_are_ordered() {
        let mut log = MockCommitLog::new();
        log.add_release("1.0.0");
        log.add_commit("a", "one", "x");
        log.add_commit("b", "two", "x");

        let commits = log.commits_since("1.0.0").unwrap();
        assert!(commits[0].timestamp < commits[1].timestamp);
    }
}
