//! Release decision and changelog orchestration
//!
//! The release decision is deliberately a simpler test than full
//! classification: a build is a release exactly when its version does not
//! carry the snapshot suffix. The finer-grained [crate::classify] is used
//! where legacy-qualifier nuance matters, e.g. when scanning historical tags
//! for the previous release.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::changelog::{ChangeLogFormat, ChangeLogRenderer};
use crate::error::{ReleaseError, Result};
use crate::vcs::{CommitLog, VersionSource};

/// Suffix marking a snapshot (non-release) version, anchored at end of input
pub static SNAPSHOT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-SNAPSHOT\z").expect("snapshot suffix pattern is valid"));

/// Outcome of the release decision for one build invocation
///
/// Computed once per invocation, never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    /// Whether the current version is a release (no snapshot suffix)
    pub is_release: bool,
    /// Most recent release version preceding the current one
    pub previous_version: String,
    /// Version of the current build
    pub current_version: String,
}

/// Orchestrates the release decision and changelog generation
///
/// Generic over its three collaborators: a [VersionSource] for the inferred
/// version pair, a [CommitLog] for history access and a [ChangeLogRenderer]
/// for the output text.
pub struct ReleaseInference<S, L, R> {
    versions: S,
    commit_log: L,
    renderer: R,
    snapshot_suffix: Regex,
    auxiliary: bool,
}

impl<S, L, R> ReleaseInference<S, L, R>
where
    S: VersionSource,
    L: CommitLog,
    R: ChangeLogRenderer,
{
    pub fn new(versions: S, commit_log: L, renderer: R) -> Self {
        ReleaseInference {
            versions,
            commit_log,
            renderer,
            snapshot_suffix: SNAPSHOT_SUFFIX.clone(),
            auxiliary: false,
        }
    }

    /// Mark this inference as belonging to an auxiliary build context that
    /// structurally cannot have releases (e.g. a helper sub-build). All
    /// operations then fail with [ReleaseError::NotApplicable].
    pub fn auxiliary(mut self, auxiliary: bool) -> Self {
        self.auxiliary = auxiliary;
        self
    }

    /// Override the snapshot suffix pattern
    pub fn with_snapshot_suffix(mut self, pattern: Regex) -> Self {
        self.snapshot_suffix = pattern;
        self
    }

    fn check_applicable(&self, what: &str) -> Result<()> {
        if self.auxiliary {
            return Err(ReleaseError::not_applicable(format!(
                "auxiliary build can't have {}",
                what
            )));
        }
        Ok(())
    }

    /// Decide whether the current build is a release
    ///
    /// # Errors
    /// [ReleaseError::NotApplicable] in an auxiliary context; otherwise any
    /// error from the version source.
    pub fn decide(&self) -> Result<ReleaseDecision> {
        self.check_applicable("releases")?;

        let inferred = self.versions.inferred_version()?;
        let is_release = !self.snapshot_suffix.is_match(&inferred.current);

        debug!(
            "version {} (previous {}): is_release={}",
            inferred.current, inferred.previous, is_release
        );

        Ok(ReleaseDecision {
            is_release,
            previous_version: inferred.previous,
            current_version: inferred.current,
        })
    }

    /// Render the changelog for a decision's version range
    ///
    /// Fetches commits strictly after the previous release and hands the
    /// sequence unmodified to the renderer.
    ///
    /// # Errors
    /// [ReleaseError::NotApplicable] in an auxiliary context;
    /// [ReleaseError::ChangeLogUnavailable] when the previous release cannot
    /// be resolved in history or a collaborator fails. No partial or empty
    /// changelog is produced on failure.
    pub fn change_log(&self, decision: &ReleaseDecision, format: ChangeLogFormat) -> Result<String> {
        self.check_applicable("changelog")?;

        let commits = self
            .commit_log
            .commits_since(&decision.previous_version)
            .map_err(|e| match e {
                unavailable @ ReleaseError::ChangeLogUnavailable(_) => unavailable,
                other => ReleaseError::changelog_unavailable(other.to_string()),
            })?;

        debug!(
            "rendering changelog {} -> {} ({} commits)",
            decision.previous_version,
            decision.current_version,
            commits.len()
        );

        self.renderer.render(
            &commits,
            &decision.previous_version,
            &decision.current_version,
            format,
        )
    }
}
