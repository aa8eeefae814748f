//! Quality-gate evaluation.
//!
//! The gate turns a [`MetricsSnapshot`] into one of four verdicts by
//! checking ordered rules; the first rule that matches wins:
//!
//! 1. **Critical**: maintainability rated E (numeric ≥ 4.5).
//! 2. **Failed**: new code introduced bugs or vulnerabilities.
//! 3. **Failed**: two or more of maintainability, reliability and security
//!    rated C or worse (numeric ≥ 2.5).
//! 4. **Warning**: any of those three rated exactly C, or debt ratio above 5%.
//! 5. **Passed**: otherwise.
//!
//! Unknown ratings and an unknown debt ratio are left out of every
//! comparison. All functions here are pure.
//!
//! # Module Structure
//!
//! - `types` - verdicts, rules and the gate result
//! - `rules` - the ordered rule chain
//! - `conditions` - per-dimension conditions for display
//! - `recommendations` - remediation actions derived from the snapshot

pub mod conditions;
pub mod recommendations;
mod rules;
pub mod types;

pub use conditions::{evaluate_conditions, ConditionStatus, ConditionSummary, GateCondition};
pub use recommendations::{recommend, Recommendation};
pub use rules::{evaluate_quality_gate, evaluate_with_thresholds};
pub use types::{GateResult, GateRule, Verdict};

use crate::config::QualityLensConfig;
use crate::core::MetricsSnapshot;
use serde::Serialize;

/// Verdict plus the supporting detail shown with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateReport {
    pub result: GateResult,
    pub conditions: Vec<GateCondition>,
    pub summary: ConditionSummary,
    pub recommendations: Vec<Recommendation>,
}

pub fn build_gate_report(snapshot: &MetricsSnapshot, config: &QualityLensConfig) -> GateReport {
    let result = evaluate_with_thresholds(snapshot, &config.gate_thresholds());
    let conditions = evaluate_conditions(snapshot, &config.condition_thresholds());
    let summary = ConditionSummary::from_conditions(&conditions);
    let recommendations = recommend(snapshot, &config.recommendation_thresholds());

    GateReport {
        result,
        conditions,
        summary,
        recommendations,
    }
}
