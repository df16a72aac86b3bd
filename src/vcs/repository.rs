use crate::classifier::{classify, Classification};
use crate::error::{ReleaseError, Result};
use crate::vcs::{CommitLog, CommitRecord};
use git2::{Oid, Repository as Git2Repo};
use log::debug;
use semver::Version;
use std::path::Path;

/// Commit log provider backed by a real git repository
pub struct GitCommitLog {
    repo: Git2Repo,
}

impl GitCommitLog {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(GitCommitLog { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        GitCommitLog { repo }
    }

    /// Resolve the commit a release version was tagged at
    ///
    /// Tries `v{version}` first, then the bare version. Annotated tags are
    /// peeled to their target commit.
    fn find_release_oid(&self, version: &str) -> Result<Option<Oid>> {
        for tag_name in [format!("v{}", version), version.to_string()] {
            let reference_name = format!("refs/tags/{}", tag_name);

            match self.repo.find_reference(&reference_name) {
                Ok(reference) => {
                    let oid = reference
                        .peel(git2::ObjectType::Commit)
                        .map_err(|e| {
                            ReleaseError::version(format!(
                                "Cannot peel tag '{}': {}",
                                tag_name, e
                            ))
                        })?
                        .id();

                    debug!("resolved release {} to tag {}", version, tag_name);
                    return Ok(Some(oid));
                }
                Err(e) if e.code() == git2::ErrorCode::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(None)
    }

    /// Latest version among tags that denote releases, by SemVer order
    ///
    /// Tags are stripped of a leading `v`/`V`, filtered through the
    /// classifier (snapshot and pre-release tags are skipped), and compared
    /// as SemVer. Tags that do not parse as SemVer are ignored. Returns
    /// `None` when the repository has no release tags.
    pub fn latest_release_version(&self) -> Result<Option<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut latest: Option<Version> = None;
        for tag in tags.iter().flatten() {
            let stripped = tag.trim_start_matches('v').trim_start_matches('V');
            if classify(stripped) != Classification::Release {
                continue;
            }
            if let Ok(version) = Version::parse(stripped) {
                if latest.as_ref().map_or(true, |best| version > *best) {
                    latest = Some(version);
                }
            }
        }

        Ok(latest.map(|v| v.to_string()))
    }
}

impl CommitLog for GitCommitLog {
    fn commits_since(&self, version: &str) -> Result<Vec<CommitRecord>> {
        let from_oid = self.find_release_oid(version)?.ok_or_else(|| {
            ReleaseError::changelog_unavailable(format!(
                "previous release '{}' not found in history",
                version
            ))
        })?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if oid == from_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;

            commits.push(CommitRecord {
                id: oid.to_string(),
                message: commit.message().unwrap_or("(empty message)").to_string(),
                author: commit.author().name().unwrap_or("unknown").to_string(),
                timestamp: commit.time().seconds(),
            });
        }

        commits.reverse();

        debug!("{} commits since release {}", commits.len(), version);
        Ok(commits)
    }
}

// SAFETY: GitCommitLog wraps git2::Repository and only performs read
// operations, which are thread-safe in libgit2.
unsafe impl Sync for GitCommitLog {}
