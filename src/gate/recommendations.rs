use crate::config::RecommendationThresholds;
use crate::core::MetricsSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A remediation action suggested by the snapshot's metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    FixBugs,
    FixVulnerabilities,
    ReduceTechnicalDebt,
    IncreaseCoverage,
    /// Issues introduced since the new-code baseline, summed.
    ReviewNewCode(u64),
    RefactorDuplication,
}

impl Recommendation {
    pub fn message(self) -> String {
        match self {
            Recommendation::FixBugs => "Prioritize fixing bugs".to_string(),
            Recommendation::FixVulnerabilities => "Fix security vulnerabilities".to_string(),
            Recommendation::ReduceTechnicalDebt => "Reduce technical debt".to_string(),
            Recommendation::IncreaseCoverage => "Increase test coverage".to_string(),
            Recommendation::ReviewNewCode(1) => "Review 1 new code issue".to_string(),
            Recommendation::ReviewNewCode(issues) => format!("Review {} new code issues", issues),
            Recommendation::RefactorDuplication => "Refactor duplicated code".to_string(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Recommendations in priority order. Unmeasured values never produce one.
pub fn recommend(
    snapshot: &MetricsSnapshot,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let new_code = &snapshot.new_code;
    let new_issues = new_code.bugs + new_code.vulnerabilities + new_code.code_smells;
    [
        (snapshot.reliability.bugs > 0, Recommendation::FixBugs),
        (
            snapshot.security.vulnerabilities > 0,
            Recommendation::FixVulnerabilities,
        ),
        (
            snapshot
                .maintainability
                .debt_ratio
                .exceeds(thresholds.max_debt_ratio),
            Recommendation::ReduceTechnicalDebt,
        ),
        (
            snapshot.coverage.overall.falls_below(thresholds.min_coverage),
            Recommendation::IncreaseCoverage,
        ),
        (
            new_code.has_defects() || new_code.code_smells > thresholds.max_new_code_smells,
            Recommendation::ReviewNewCode(new_issues),
        ),
        (
            snapshot
                .duplication
                .density
                .exceeds(thresholds.max_duplication),
            Recommendation::RefactorDuplication,
        ),
    ]
    .into_iter()
    .filter_map(|(applies, rec)| applies.then_some(rec))
    .collect()
}
