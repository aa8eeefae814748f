mod common;

use common::fixture_path;
use indoc::indoc;
use pretty_assertions::assert_eq;
use qualitylens::io::{load_dora_metrics, load_history, load_latest_snapshot, parse_snapshots};
use qualitylens::{Grade, Measured, Rating};

#[test]
fn test_parse_single_snapshot_fixture() {
    let snapshot = load_latest_snapshot(&fixture_path("passing_snapshot.json"), None)
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.project_key.as_deref(), Some("clone-fklearn"));
    assert_eq!(snapshot.maintainability.rating, Rating::Letter(Grade::A));
    assert_eq!(snapshot.maintainability.debt_ratio, Measured::Value(1.2));
    assert_eq!(snapshot.maintainability.code_smells, 42);
    assert_eq!(snapshot.coverage.overall, Measured::Value(84.6));
    // "91.0" arrives as a string
    assert_eq!(snapshot.coverage.new, Measured::Value(91.0));
    assert_eq!(snapshot.size.lines_of_code, 15230);
    assert_eq!(snapshot.new_code.code_smells, 3);
    assert!(snapshot.timestamp.is_some());
}

#[test]
fn test_wildcard_and_null_are_unknown() {
    let snapshot = load_latest_snapshot(&fixture_path("critical_snapshot.json"), None)
        .unwrap()
        .unwrap();

    assert_eq!(snapshot.coverage.overall, Measured::Unknown);
    assert_eq!(snapshot.coverage.new, Measured::Unknown);
    assert_eq!(snapshot.duplication.density, Measured::Unknown);
    assert_eq!(snapshot.new_code.bugs, 2);
    assert_eq!(snapshot.new_code.vulnerabilities, 0);
    assert_eq!(snapshot.size.lines_of_code, 0);
}

#[test]
fn test_ratings_accept_letters_numbers_and_numeric_strings() {
    let json = indoc! {r#"
        {
          "maintainability": { "rating": "b" },
          "reliability": { "rating": 4 },
          "security": { "rating": "3.0" },
          "overallRating": "*"
        }
    "#};
    let snapshots = parse_snapshots(json, None).unwrap();
    let snapshot = &snapshots[0];

    assert_eq!(snapshot.maintainability.rating, Rating::Letter(Grade::B));
    assert_eq!(snapshot.reliability.rating.grade(), Some(Grade::D));
    assert_eq!(snapshot.security.rating.numeric(), Some(3.0));
    assert_eq!(snapshot.overall_rating, Rating::Unknown);
}

#[test]
fn test_missing_sections_default_to_unknown() {
    let snapshots = parse_snapshots(r#"{"projectKey": "bare"}"#, None).unwrap();
    let snapshot = &snapshots[0];

    assert!(snapshot.maintainability.rating.is_unknown());
    assert_eq!(snapshot.maintainability.debt_ratio, Measured::Unknown);
    assert_eq!(snapshot.reliability.bugs, 0);
    assert!(snapshot.timestamp.is_none());
}

#[test]
fn test_null_sections_and_odd_counts() {
    let json = indoc! {r#"
        {
          "maintainability": null,
          "reliability": { "rating": "A", "bugs": "7" },
          "security": { "vulnerabilities": -3 },
          "newCode": { "bugs": 1.9 },
          "timestamp": "last tuesday"
        }
    "#};
    let snapshot = &parse_snapshots(json, None).unwrap()[0];

    assert!(snapshot.maintainability.rating.is_unknown());
    assert_eq!(snapshot.reliability.bugs, 7);
    assert_eq!(snapshot.security.vulnerabilities, 0);
    assert_eq!(snapshot.new_code.bugs, 1);
    assert!(snapshot.timestamp.is_none());
}

#[test]
fn test_empty_documents_mean_no_data() {
    for contents in ["", "   \n", "null", "[]"] {
        assert!(
            parse_snapshots(contents, None).unwrap().is_empty(),
            "{:?} should parse as no data",
            contents
        );
    }
}

#[test]
fn test_malformed_documents_are_errors() {
    for contents in ["{not json", "\"just text\"", "42"] {
        let err = parse_snapshots(contents, None).unwrap_err();
        assert!(err.is_user_fixable(), "{:?}: {}", contents, err);
    }
}

#[test]
fn test_history_is_filtered_by_project() {
    let path = fixture_path("history.json");
    // Without a project, only the newest snapshot's project is kept.
    let unselected = load_history(&path, None).unwrap();
    assert_eq!(unselected.len(), 1);
    assert!(unselected[0].belongs_to("other-service"));
    assert_eq!(load_history(&path, Some("clone-fklearn")).unwrap().len(), 3);
    assert!(load_history(&path, Some("missing")).unwrap().is_empty());
}

#[test]
fn test_latest_snapshot_is_chronological_not_positional() {
    let path = fixture_path("history.json");
    let latest = load_latest_snapshot(&path, Some("clone-fklearn"))
        .unwrap()
        .unwrap();
    assert_eq!(latest.technical_debt_minutes, Measured::Value(540.0));

    let overall = load_latest_snapshot(&path, None).unwrap().unwrap();
    assert_eq!(overall.project_key.as_deref(), Some("other-service"));

    assert!(load_latest_snapshot(&path, Some("missing")).unwrap().is_none());
}

#[test]
fn test_missing_input_file_is_an_error() {
    let result = load_latest_snapshot(&fixture_path("does_not_exist.json"), None);
    assert!(result.is_err());
}

#[test]
fn test_dora_fixture() {
    let metrics = load_dora_metrics(&fixture_path("dora_metrics.json"))
        .unwrap()
        .unwrap();
    assert_eq!(metrics.deployment_frequency.total, 12);
    assert_eq!(metrics.deployment_frequency.per_day, Measured::Value(0.4));
    assert_eq!(metrics.lead_time.average, Measured::Value(2160.5));
    assert_eq!(metrics.change_failure_rate.rate, Measured::Value(8.3));
}
