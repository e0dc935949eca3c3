use chrono::{NaiveDate, NaiveDateTime};
use version_scout::core::patterns::PatternSet;
use version_scout::core::SourceText;
use version_scout::domain::model::{FilterOutcome, RejectReason, ReportOutcome};
use version_scout::VersionExtractor;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn extractor(extra_denylist: &[String]) -> VersionExtractor {
    VersionExtractor::standard(PatternSet::shared().unwrap(), now(), extra_denylist)
}

fn source(lines: &[&str]) -> SourceText {
    SourceText::new("Vendor", lines.iter().map(|l| l.to_string()).collect())
}

fn outcomes(lines: &[&str]) -> Vec<(String, FilterOutcome)> {
    extractor(&[])
        .extract(&source(lines))
        .decisions
        .into_iter()
        .map(|d| (d.candidate.matched, d.outcome))
        .collect()
}

#[test]
fn test_rejection_reasons() {
    assert_eq!(
        outcomes(&["Version 4.2.1 released Jan 5, 2099"]),
        vec![(
            "Version 4.2.1".to_string(),
            FilterOutcome::Reject(RejectReason::FutureDate)
        )]
    );
    assert_eq!(
        outcomes(&["build 12", "Requires Chrome 120"]),
        vec![(
            "build 12".to_string(),
            FilterOutcome::Reject(RejectReason::KeywordDenylist)
        )]
    );
    assert_eq!(
        outcomes(&["v9"]),
        vec![("v9".to_string(), FilterOutcome::Reject(RejectReason::BareDigit))]
    );
    assert_eq!(
        outcomes(&["Download version 3.3.0", "/vendor/bundle.js"]),
        vec![(
            "version 3.3.0".to_string(),
            FilterOutcome::Reject(RejectReason::AssetPath)
        )]
    );
}

#[test]
fn test_benign_long_number_is_kept() {
    let extraction = extractor(&[]).extract(&source(&[
        "Latest stable",
        "v3.14.159.26",
        "Published April 2, 2024",
    ]));
    assert_eq!(extraction.versions, vec!["v3.14.159.26".to_string()]);
}

#[test]
fn test_extra_denylist_from_configuration() {
    let lines = ["Bundled runtime", "Version 2.2.2", "Powered by Electron"];

    let kept = extractor(&[]).extract(&source(&lines));
    assert_eq!(kept.versions, vec!["Version 2.2.2".to_string()]);

    let dropped = extractor(&["electron".to_string()]).extract(&source(&lines));
    assert!(dropped.versions.is_empty());
}

#[test]
fn test_release_notes_page() {
    let report = extractor(&[]).report(&source(&[
        "SteelSeries GG release notes",
        "GG 85.0",
        "Published May 14, 2024",
        "New Sonar presets",
        "GG 84.1",
        "Published April 30, 2024",
        "Fixed audio device switching",
        "GG 85.0",
        "Hotfix notes",
    ]));

    assert_eq!(report.vendor, "Vendor");
    assert_eq!(
        report.outcome,
        ReportOutcome::Versions {
            versions: vec!["GG 85.0".to_string(), "GG 84.1".to_string()]
        }
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let lines = ["Version 1.0.0", "Build 2048", "Revision 7.7.7 beta 3"];
    let first = extractor(&[]).extract(&source(&lines)).versions;
    let second = extractor(&[]).extract(&source(&lines)).versions;
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "Version 1.0.0".to_string(),
            "Build 2048".to_string(),
            "Revision 7.7.7 beta 3".to_string()
        ]
    );
}
