//! Version-semantics engine for build and release tooling.
//!
//! Two pieces, the second built on the first:
//!
//! - [classifier]: decide whether an arbitrary version string denotes a
//!   pre-release build, tolerating both strict SemVer and legacy
//!   Maven-qualifier schemes (`1.0.0-SP2`, `2.0.0.Final`, `2.0-SNAPSHOT`).
//! - [release]: decide whether the current build is a release and, if so,
//!   produce a changelog since the previous release by delegating to the
//!   [vcs] collaborators and a [changelog] renderer.

pub mod changelog;
pub mod classifier;
pub mod error;
pub mod release;
pub mod vcs;

pub use changelog::{ChangeLogFormat, ChangeLogRenderer, ListRenderer};
pub use classifier::{classify, Classification};
pub use error::{ReleaseError, Result};
pub use release::{ReleaseDecision, ReleaseInference, SNAPSHOT_SUFFIX};
pub use vcs::{CommitLog, CommitRecord, InferredVersion, VersionSource};
