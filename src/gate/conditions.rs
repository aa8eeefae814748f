//! Per-dimension gate conditions shown alongside the overall verdict.

use crate::config::ConditionThresholds;
use crate::core::{format_rating, Measured, MetricsSnapshot, Rating};
use crate::formatting::format_coverage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    Passed,
    Warning,
    Failed,
    /// An input the condition depends on was not measured.
    Unknown,
}

impl ConditionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConditionStatus::Passed => "passed",
            ConditionStatus::Warning => "warning",
            ConditionStatus::Failed => "failed",
            ConditionStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateCondition {
    pub name: &'static str,
    pub status: ConditionStatus,
    pub value: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl ConditionSummary {
    pub fn from_conditions(conditions: &[GateCondition]) -> Self {
        conditions
            .iter()
            .fold(Self::default(), |mut acc, c| {
                match c.status {
                    ConditionStatus::Passed => acc.passed += 1,
                    ConditionStatus::Warning => acc.warnings += 1,
                    ConditionStatus::Failed => acc.failed += 1,
                    ConditionStatus::Unknown => acc.unknown += 1,
                }
                acc
            })
    }
}

/// Reliability, security, maintainability and coverage conditions, in that order.
pub fn evaluate_conditions(
    snapshot: &MetricsSnapshot,
    thresholds: &ConditionThresholds,
) -> Vec<GateCondition> {
    vec![
        GateCondition {
            name: "Reliability",
            status: rating_status(&snapshot.reliability.rating, thresholds.passing_rating),
            value: format_rating(&snapshot.reliability.rating),
            detail: format!("{} bugs", snapshot.reliability.bugs),
        },
        GateCondition {
            name: "Security",
            status: rating_status(&snapshot.security.rating, thresholds.passing_rating),
            value: format_rating(&snapshot.security.rating),
            detail: format!("{} vulnerabilities", snapshot.security.vulnerabilities),
        },
        maintainability_condition(snapshot, thresholds),
        GateCondition {
            name: "Coverage",
            status: coverage_status(snapshot.coverage.overall, thresholds),
            value: format_coverage(snapshot.coverage.overall),
            detail: "test coverage".to_string(),
        },
    ]
}

fn rating_status(rating: &Rating, passing_rating: f64) -> ConditionStatus {
    match rating.numeric() {
        None => ConditionStatus::Unknown,
        Some(n) if n <= passing_rating => ConditionStatus::Passed,
        Some(_) => ConditionStatus::Failed,
    }
}

fn maintainability_condition(
    snapshot: &MetricsSnapshot,
    thresholds: &ConditionThresholds,
) -> GateCondition {
    let rating = &snapshot.maintainability.rating;
    let debt_ratio = snapshot.maintainability.debt_ratio;

    // A known failure on either input decides the condition; otherwise
    // both inputs must be known to pass.
    let status = match (
        rating_status(rating, thresholds.passing_rating),
        debt_ratio.value(),
    ) {
        (ConditionStatus::Failed, _) => ConditionStatus::Failed,
        (_, Some(d)) if d >= thresholds.max_debt_ratio => ConditionStatus::Failed,
        (ConditionStatus::Passed, Some(_)) => ConditionStatus::Passed,
        _ => ConditionStatus::Unknown,
    };

    GateCondition {
        name: "Maintainability",
        status,
        value: format_rating(rating),
        detail: format!("{} debt ratio", format_coverage(debt_ratio)),
    }
}

fn coverage_status(coverage: Measured, thresholds: &ConditionThresholds) -> ConditionStatus {
    match coverage.value() {
        None => ConditionStatus::Unknown,
        Some(c) if c >= thresholds.coverage_pass => ConditionStatus::Passed,
        Some(c) if c >= thresholds.coverage_warning => ConditionStatus::Warning,
        Some(_) => ConditionStatus::Failed,
    }
}
