//! Ordered quality-gate rules.
//!
//! Rules are checked top to bottom and the first match decides the verdict.
//! Each rule only looks at known values: an unknown rating or debt ratio
//! is excluded from its comparison rather than read as a number.

use super::types::{GateResult, GateRule};
use crate::config::GateThresholds;
use crate::core::MetricsSnapshot;

type Rule = fn(&MetricsSnapshot, &GateThresholds) -> Option<GateRule>;

const RULES: [Rule; 4] = [
    critical_maintainability,
    new_code_defects,
    aggregate_ratings,
    needs_monitoring,
];

/// Evaluate a snapshot with the default thresholds.
pub fn evaluate_quality_gate(snapshot: &MetricsSnapshot) -> GateResult {
    evaluate_with_thresholds(snapshot, &GateThresholds::default())
}

pub fn evaluate_with_thresholds(
    snapshot: &MetricsSnapshot,
    thresholds: &GateThresholds,
) -> GateResult {
    let rule = RULES
        .iter()
        .find_map(|rule| rule(snapshot, thresholds))
        .unwrap_or(GateRule::Default);
    log::debug!("Quality gate decided by {:?}", rule);
    rule.into()
}

fn critical_maintainability(snapshot: &MetricsSnapshot, t: &GateThresholds) -> Option<GateRule> {
    snapshot
        .maintainability
        .rating
        .numeric()
        .filter(|n| *n >= t.critical_rating)
        .map(|_| GateRule::CriticalMaintainability)
}

fn new_code_defects(snapshot: &MetricsSnapshot, _: &GateThresholds) -> Option<GateRule> {
    snapshot
        .new_code
        .has_defects()
        .then_some(GateRule::NewCodeDefects)
}

fn aggregate_ratings(snapshot: &MetricsSnapshot, t: &GateThresholds) -> Option<GateRule> {
    let failing = snapshot
        .dimension_ratings()
        .iter()
        .filter_map(|r| r.numeric())
        .filter(|n| *n >= t.failing_rating)
        .count();
    (failing >= t.min_failing_dimensions).then_some(GateRule::AggregateRatings)
}

fn needs_monitoring(snapshot: &MetricsSnapshot, t: &GateThresholds) -> Option<GateRule> {
    let at_warning_grade = snapshot
        .dimension_ratings()
        .iter()
        .filter_map(|r| r.numeric())
        .any(|n| (n - t.warning_rating).abs() < f64::EPSILON);
    let debt_too_high = snapshot.maintainability.debt_ratio.exceeds(t.max_debt_ratio);
    (at_warning_grade || debt_too_high).then_some(GateRule::Monitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grade, Measured, Rating};
    use crate::gate::Verdict;

    fn all_a() -> MetricsSnapshot {
        let mut s = MetricsSnapshot::with_ratings(Grade::A, Grade::A, Grade::A);
        s.maintainability.debt_ratio = Measured::Value(0.0);
        s
    }

    #[test]
    fn test_all_a_passes() {
        let result = evaluate_quality_gate(&all_a());
        assert_eq!(result.status, Verdict::Passed);
        assert_eq!(result.rule, GateRule::Default);
        assert_eq!(result.label, "Passed");
    }

    #[test]
    fn test_worst_maintainability_is_critical() {
        let mut s = all_a();
        s.maintainability.rating = Grade::E.into();
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Critical);
    }

    #[test]
    fn test_grade_d_maintainability_is_not_critical() {
        let mut s = all_a();
        s.maintainability.rating = Grade::D.into();
        assert_ne!(evaluate_quality_gate(&s).status, Verdict::Critical);
    }

    #[test]
    fn test_critical_wins_over_new_code_failure() {
        let mut s = all_a();
        s.maintainability.rating = Grade::E.into();
        s.new_code.bugs = 4;
        let result = evaluate_quality_gate(&s);
        assert_eq!(result.status, Verdict::Critical);
        assert_eq!(result.rule, GateRule::CriticalMaintainability);
    }

    #[test]
    fn test_new_code_bug_fails_healthy_project() {
        let mut s = all_a();
        s.new_code.bugs = 1;
        let result = evaluate_quality_gate(&s);
        assert_eq!(result.status, Verdict::Failed);
        assert_eq!(result.rule, GateRule::NewCodeDefects);
    }

    #[test]
    fn test_new_code_smells_alone_do_not_fail() {
        let mut s = all_a();
        s.new_code.code_smells = 12;
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Passed);
    }

    #[test]
    fn test_two_dimensions_at_c_or_worse_fail() {
        let s = MetricsSnapshot::with_ratings(Grade::A, Grade::C, Grade::D);
        let result = evaluate_quality_gate(&s);
        assert_eq!(result.status, Verdict::Failed);
        assert_eq!(result.rule, GateRule::AggregateRatings);
    }

    #[test]
    fn test_single_c_is_a_warning() {
        let s = MetricsSnapshot::with_ratings(Grade::C, Grade::A, Grade::A);
        let result = evaluate_quality_gate(&s);
        assert_eq!(result.status, Verdict::Warning);
        assert_eq!(result.rule, GateRule::Monitor);
    }

    #[test]
    fn test_single_d_without_debt_passes() {
        let s = MetricsSnapshot::with_ratings(Grade::A, Grade::D, Grade::A);
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Passed);
    }

    #[test]
    fn test_high_debt_ratio_is_a_warning() {
        let mut s = all_a();
        s.maintainability.debt_ratio = Measured::Value(5.5);
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Warning);

        s.maintainability.debt_ratio = Measured::Value(5.0);
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Passed);
    }

    #[test]
    fn test_unknown_ratings_never_trigger_rules() {
        let s = MetricsSnapshot::default();
        let result = evaluate_quality_gate(&s);
        assert_eq!(result.status, Verdict::Passed);
    }

    #[test]
    fn test_out_of_scale_numeric_is_excluded() {
        let mut s = all_a();
        s.maintainability.rating = Rating::Numeric(0.0);
        assert_eq!(evaluate_quality_gate(&s).status, Verdict::Passed);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = GateThresholds {
            max_debt_ratio: 2.0,
            ..Default::default()
        };
        let mut s = all_a();
        s.maintainability.debt_ratio = Measured::Value(3.0);
        assert_eq!(
            evaluate_with_thresholds(&s, &thresholds).status,
            Verdict::Warning
        );
    }
}
