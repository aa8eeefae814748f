//! Loading snapshots and DORA documents from JSON inputs.
//!
//! An input holds either one snapshot object or an array of them (a
//! history). Empty input, `null` and an empty array all mean "no data",
//! which surfaces as `None` or an empty history rather than an error.

use super::read_input;
use crate::core::MetricsSnapshot;
use crate::dora::DoraMetrics;
use crate::errors::{Error, Result};
use crate::trend::chronological;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    History(Vec<MetricsSnapshot>),
    Single(Box<MetricsSnapshot>),
}

/// Parse a document into snapshots in document order.
pub fn parse_snapshots(contents: &str, source: Option<&Path>) -> Result<Vec<MetricsSnapshot>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: Option<SnapshotDocument> = serde_json::from_str(contents).map_err(|e| {
        Error::invalid_input(
            format!("expected a snapshot object or array: {}", e),
            source.map(Path::to_path_buf),
        )
    })?;

    Ok(match document {
        None => Vec::new(),
        Some(SnapshotDocument::History(history)) => history,
        Some(SnapshotDocument::Single(snapshot)) => vec![*snapshot],
    })
}

/// Snapshots for `project`. With no project selected, a history that spans
/// several projects is narrowed to the project of its newest snapshot.
fn for_project(history: Vec<MetricsSnapshot>, project: Option<&str>) -> Vec<MetricsSnapshot> {
    if let Some(key) = project {
        return history.into_iter().filter(|s| s.belongs_to(key)).collect();
    }
    let Some(newest) = select_latest(&history).map(|s| s.project_key) else {
        return history;
    };
    if history.iter().all(|s| s.project_key == newest) {
        return history;
    }
    log::info!(
        "Input holds several projects; using {} from the newest snapshot",
        newest.as_deref().unwrap_or("<unnamed>")
    );
    history
        .into_iter()
        .filter(|s| s.project_key == newest)
        .collect()
}

/// Most recent snapshot in `history`.
pub fn select_latest(history: &[MetricsSnapshot]) -> Option<MetricsSnapshot> {
    chronological(history).last().map(|s| (*s).clone())
}

/// Read an input and return its history for the selected project.
pub fn load_history(path: &Path, project: Option<&str>) -> Result<Vec<MetricsSnapshot>> {
    let contents = read_input(path)?;
    let history = for_project(parse_snapshots(&contents, Some(path))?, project);
    log::debug!(
        "Loaded {} snapshot(s) from {}",
        history.len(),
        path.display()
    );
    Ok(history)
}

/// Read an input and return the latest snapshot for the selected project,
/// or `None` when there is no data.
pub fn load_latest_snapshot(path: &Path, project: Option<&str>) -> Result<Option<MetricsSnapshot>> {
    let history = load_history(path, project)?;
    let latest = select_latest(&history);
    if latest.is_none() {
        match project {
            Some(key) => log::info!("No snapshot for project {} in {}", key, path.display()),
            None => log::info!("No snapshot in {}", path.display()),
        }
    }
    Ok(latest)
}

/// Read a DORA metrics document; `None` when the input is empty or `null`.
pub fn load_dora_metrics(path: &Path) -> Result<Option<DoraMetrics>> {
    let contents = read_input(path)?;
    if contents.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&contents).map_err(|e| {
        Error::invalid_input(
            format!("expected a DORA metrics object: {}", e),
            Some(path.to_path_buf()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grade;
    use tempfile::TempDir;

    #[test]
    fn test_empty_and_null_inputs_have_no_snapshots() {
        for input in ["", "   \n", "null", "[]"] {
            assert!(parse_snapshots(input, None).unwrap().is_empty(), "{:?}", input);
        }
    }

    #[test]
    fn test_single_object_is_one_snapshot() {
        let snapshots = parse_snapshots(r#"{"reliability": {"rating": "B"}}"#, None).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].reliability.rating.grade(), Some(Grade::B));
    }

    #[test]
    fn test_empty_object_is_valid_snapshot() {
        assert_eq!(
            parse_snapshots("{}", None).unwrap(),
            vec![MetricsSnapshot::default()]
        );
    }

    #[test]
    fn test_scalar_document_is_rejected() {
        let err = parse_snapshots("42", Some(Path::new("in.json"))).unwrap_err();
        assert!(err.to_string().contains("in.json"));
        assert!(err.is_user_fixable());
    }

    fn mixed_history() -> Vec<MetricsSnapshot> {
        parse_snapshots(
            r#"[
                {"projectKey": "api", "timestamp": "2025-03-02T10:00:00Z", "technicalDebtMinutes": 20},
                {"projectKey": "web", "timestamp": "2025-03-03T10:00:00Z", "technicalDebtMinutes": 30},
                {"projectKey": "api", "timestamp": "2025-03-01T10:00:00Z", "technicalDebtMinutes": 10}
            ]"#,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_select_latest_by_timestamp() {
        let latest = select_latest(&mixed_history()).unwrap();
        assert_eq!(latest.project_key.as_deref(), Some("web"));
        assert_eq!(select_latest(&[]), None);
    }

    #[test]
    fn test_selected_project_filters_history() {
        let api = for_project(mixed_history(), Some("api"));
        assert_eq!(api.len(), 2);
        assert_eq!(select_latest(&api).unwrap().technical_debt_minutes.value(), Some(20.0));
        assert!(for_project(mixed_history(), Some("mobile")).is_empty());
    }

    #[test]
    fn test_unselected_mixed_history_keeps_newest_project_only() {
        let history = for_project(mixed_history(), None);
        assert_eq!(history.len(), 1);
        assert!(history.iter().all(|s| s.belongs_to("web")));
    }

    #[test]
    fn test_unselected_single_project_history_is_kept_whole() {
        let api = for_project(mixed_history(), Some("api"));
        assert_eq!(for_project(api.clone(), None), api);
    }

    #[test]
    fn test_load_latest_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"[{"projectKey": "api"}, {"projectKey": "api", "overallRating": "A"}]"#)
            .unwrap();

        // Without timestamps the document order is chronological.
        let latest = load_latest_snapshot(&path, Some("api")).unwrap().unwrap();
        assert_eq!(latest.overall_rating.grade(), Some(Grade::A));
        assert!(load_latest_snapshot(&path, Some("web")).unwrap().is_none());
    }

    #[test]
    fn test_load_dora_null_is_no_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dora.json");
        std::fs::write(&path, "null").unwrap();
        assert_eq!(load_dora_metrics(&path).unwrap(), None);
    }
}
