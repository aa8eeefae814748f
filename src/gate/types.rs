//! Result types for quality-gate evaluation.
//!
//! These are pure data structures with no behavior beyond labelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate verdict, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Critical,
    Failed,
    Warning,
    Passed,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Critical => "Critical",
            Verdict::Failed => "Failed",
            Verdict::Warning => "Warning",
            Verdict::Passed => "Passed",
        }
    }

    /// Whether this verdict should stop a pipeline.
    pub fn is_blocking(self) -> bool {
        matches!(self, Verdict::Critical | Verdict::Failed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The gate rule that decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateRule {
    /// Maintainability rated at the worst end of the scale.
    CriticalMaintainability,
    /// New code introduced bugs or vulnerabilities.
    NewCodeDefects,
    /// Too many dimensions rated C or worse.
    AggregateRatings,
    /// A dimension rated exactly C, or debt ratio too high.
    Monitor,
    /// No rule matched.
    Default,
}

impl GateRule {
    pub fn verdict(self) -> Verdict {
        match self {
            GateRule::CriticalMaintainability => Verdict::Critical,
            GateRule::NewCodeDefects | GateRule::AggregateRatings => Verdict::Failed,
            GateRule::Monitor => Verdict::Warning,
            GateRule::Default => Verdict::Passed,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GateRule::CriticalMaintainability => {
                "Project has severe problems requiring immediate action."
            }
            GateRule::NewCodeDefects => "New code introduces bugs or vulnerabilities.",
            GateRule::AggregateRatings => "Project does not meet minimum quality criteria.",
            GateRule::Monitor => "Project has issues that should be monitored.",
            GateRule::Default => "Project meets quality criteria.",
        }
    }
}

/// Outcome of evaluating a snapshot against the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    pub status: Verdict,
    pub rule: GateRule,
    pub label: String,
    pub message: String,
}

impl From<GateRule> for GateResult {
    fn from(rule: GateRule) -> Self {
        let status = rule.verdict();
        Self {
            status,
            rule,
            label: status.label().to_string(),
            message: rule.message().to_string(),
        }
    }
}
