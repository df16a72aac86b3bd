//! Version string classification
//!
//! Decides whether a version string denotes a pre-release build. Strict
//! SemVer input is parsed and its pre-release component checked against a
//! release-qualifier allow-list (Maven/OSGi ecosystems use qualifiers like
//! `SP1` or `Final` on final releases); anything unparsable falls back to a
//! marker scan over the whole string.
//!
//! The qualifier and marker sets are kept as policy tables so rule changes
//! are data edits rather than control-flow surgery.

use semver::Version;

/// Separator characters recognized inside version qualifiers
const SEPARATORS: &[char] = &['-', '\\', '.', '_'];

/// Qualifiers that mark a SemVer pre-release component as a final release
/// anyway. Matched by prefix against uppercased labels; a digits-only label
/// (build number) also counts as final.
const RELEASE_QUALIFIERS: &[&str] = &["GA", "RELEASE", "MR", "SP", "SR", "FINAL"];

/// Markers that flag an unparsable (legacy-scheme) version as a pre-release.
/// Matched by prefix against uppercased labels; `A`/`B`/`M` followed by
/// digits (e.g. `B2`, `M1`) also counts.
const PRERELEASE_MARKERS: &[&str] = &[
    "DEV",
    "SNAPSHOT",
    "ALPHA",
    "BETA",
    "MILESTONE",
    "RC",
    "CR",
];

/// Result of classifying a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Input was empty; nothing to classify
    Unknown,
    /// Version denotes a final, publishable build
    Release,
    /// Version denotes a non-final build (alpha/beta/milestone/candidate/snapshot)
    PreRelease,
}

impl Classification {
    /// Tri-state view of the classification
    ///
    /// Returns `None` for [Classification::Unknown], otherwise whether the
    /// version is a pre-release.
    pub fn is_pre_release(self) -> Option<bool> {
        match self {
            Classification::Unknown => None,
            Classification::Release => Some(false),
            Classification::PreRelease => Some(true),
        }
    }
}

/// Classify a version string as release or pre-release
///
/// Never fails: empty input yields [Classification::Unknown], and input that
/// does not parse as SemVer is classified by the fallback marker scan.
/// Case-insensitive via ASCII folding, so the result does not depend on the
/// process locale. Pure function, safe to call concurrently.
///
/// # Example
/// ```
/// use release_semantics::{classify, Classification};
///
/// assert_eq!(classify("1.2.3"), Classification::Release);
/// assert_eq!(classify("1.2.3-rc.1"), Classification::PreRelease);
/// assert_eq!(classify("1.2.3-SP1"), Classification::Release);
/// assert_eq!(classify("2.0-SNAPSHOT"), Classification::PreRelease);
/// assert_eq!(classify(""), Classification::Unknown);
/// ```
pub fn classify(version: &str) -> Classification {
    if version.is_empty() {
        return Classification::Unknown;
    }

    match Version::parse(version) {
        Ok(parsed) => classify_pre_release_component(parsed.pre.as_str()),
        Err(_) => classify_legacy(version),
    }
}

/// Allow-list check over the pre-release component of a parsed SemVer
/// version: every label must be a known release qualifier for the version to
/// count as final.
fn classify_pre_release_component(pre: &str) -> Classification {
    if pre.is_empty() {
        return Classification::Release;
    }

    if labels(pre).all(|label| is_release_qualifier(&label)) {
        Classification::Release
    } else {
        Classification::PreRelease
    }
}

/// Marker scan over the entire original string, for versions with no
/// structural split between core and qualifier: any pre-release marker
/// anywhere makes it a pre-release.
fn classify_legacy(version: &str) -> Classification {
    if labels(version).any(|label| is_prerelease_marker(&label)) {
        Classification::PreRelease
    } else {
        Classification::Release
    }
}

/// Split on the separator set and uppercase each label. Empty labels (e.g.
/// from a trailing separator) are kept; the predicates reject them.
fn labels(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(SEPARATORS).map(|label| label.to_ascii_uppercase())
}

fn is_release_qualifier(label: &str) -> bool {
    RELEASE_QUALIFIERS.iter().any(|q| label.starts_with(q))
        || (!label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()))
}

fn is_prerelease_marker(label: &str) -> bool {
    PRERELEASE_MARKERS.iter().any(|m| label.starts_with(m)) || is_lettered_build(label)
}

/// Matches qualifiers of the form `[ABM]<digits>` exactly, e.g. `B2`, `M1`
fn is_lettered_build(label: &str) -> bool {
    match label.as_bytes() {
        [b'A' | b'B' | b'M', digits @ ..] if !digits.is_empty() => {
            digits.iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}
