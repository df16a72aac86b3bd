// tests/classifier_test.rs
//
// Classification contract across the version schemes seen in the wild:
// strict SemVer, Maven-qualifier suffixes, and ad hoc legacy strings.

use release_semantics::{classify, Classification};

#[test]
fn test_empty_input_yields_unknown() {
    assert_eq!(classify(""), Classification::Unknown);
    assert_eq!(classify("").is_pre_release(), None);
}

#[test]
fn test_release_classification_table() {
    let releases = [
        "2.3.4",
        "0.0.1",
        "1.0.0-SP1",
        "1.0.0-FINAL",
        "1.0.0-ga",
        "1.0.0-2",
        "1.0.0-RELEASE",
        "2.0.0.Final",
        "2.0",
        "2.0.0.0",
        "1.0.0+build.5",
    ];

    for version in releases {
        assert_eq!(
            classify(version),
            Classification::Release,
            "expected '{}' to classify as a release",
            version
        );
    }
}

#[test]
fn test_prerelease_classification_table() {
    let prereleases = [
        "1.0.0-alpha",
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "1.0.0-B2",
        "2.0-SNAPSHOT",
        "2.0-M1",
        "2.0.0.CR2",
        "3.0-dev-17",
        "1.2.3.4-milestone",
    ];

    for version in prereleases {
        assert_eq!(
            classify(version),
            Classification::PreRelease,
            "expected '{}' to classify as a pre-release",
            version
        );
    }
}

#[test]
fn test_case_folding_is_total() {
    for (a, b) in [
        ("1.0.0-Beta", "1.0.0-beta"),
        ("1.0.0-BETA", "1.0.0-beta"),
        ("2.0-Snapshot", "2.0-SNAPSHOT"),
        ("1.0.0-Sp1", "1.0.0-SP1"),
        ("2.0.0.FINAL", "2.0.0.final"),
    ] {
        assert_eq!(classify(a), classify(b), "'{}' vs '{}'", a, b);
    }
}

#[test]
fn test_malformed_input_never_panics() {
    let garbage = [
        "1.0.0-",
        "-",
        "---",
        "._-\\",
        "....",
        "v1.2.3",
        "not a version at all",
        "1.2.3-\u{e9}t\u{e9}",
        "\\\\\\",
    ];

    for version in garbage {
        // Exactly one of Release/PreRelease for any non-empty input
        let classification = classify(version);
        assert_ne!(classification, Classification::Unknown, "'{}'", version);
    }
}

#[test]
fn test_classification_is_deterministic() {
    for version in ["1.0.0-rc.1", "2.0.0.Final", "2.0-SNAPSHOT", "garbage"] {
        let first = classify(version);
        for _ in 0..3 {
            assert_eq!(classify(version), first);
        }
    }
}
