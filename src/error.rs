use thiserror::Error;

/// Unified error type for release-semantics operations
///
/// Note that version classification is not represented here: the classifier
/// absorbs malformed input into a [crate::Classification] value and never
/// fails.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Release semantics requested in a context that structurally cannot
    /// have releases (e.g. an auxiliary, non-publishable sub-build)
    #[error("Release semantics not applicable: {0}")]
    NotApplicable(String),

    /// The previous release could not be resolved in history, or a
    /// collaborator failed while producing the changelog
    #[error("Changelog unavailable: {0}")]
    ChangeLogUnavailable(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results in release-semantics
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a not-applicable error with context
    pub fn not_applicable(msg: impl Into<String>) -> Self {
        ReleaseError::NotApplicable(msg.into())
    }

    /// Create a changelog-unavailable error with context
    pub fn changelog_unavailable(msg: impl Into<String>) -> Self {
        ReleaseError::ChangeLogUnavailable(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }
}
