//! Classification of DORA delivery metrics.
//!
//! The figures themselves are computed by the metrics source from its
//! deployment records; this module only reads them and places each one in
//! a performance band.

use crate::core::measure::{lenient_count, lenient_text, null_as_default};
use crate::core::Measured;
use serde::{Deserialize, Serialize};
use std::fmt;

const HOUR_MINUTES: f64 = 60.0;
const DAY_MINUTES: f64 = 1440.0;
const WEEK_MINUTES: f64 = 10080.0;

/// DORA metrics document as returned by the metrics source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoraMetrics {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deployment_frequency: DeploymentFrequency,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lead_time: DurationFigure,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_failure_rate: ChangeFailureRate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean_time_to_restore: DurationFigure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentFrequency {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u64,
    #[serde(default)]
    pub per_day: Measured,
}

/// A duration in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationFigure {
    #[serde(default)]
    pub average: Measured,
    #[serde(default)]
    pub median: Measured,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeFailureRate {
    /// Percent of deployments that caused a failure
    #[serde(default)]
    pub rate: Measured,
    #[serde(default, deserialize_with = "lenient_count")]
    pub failures: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Elite,
    High,
    Medium,
    Low,
    Unknown,
}

impl PerformanceLevel {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Elite => "Elite",
            PerformanceLevel::High => "High",
            PerformanceLevel::Medium => "Medium",
            PerformanceLevel::Low => "Low",
            PerformanceLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deployments per day: ≥1 elite, ≥0.14 (about weekly) high, ≥0.03 (about
/// monthly) medium.
pub fn classify_deployment_frequency(per_day: Measured) -> PerformanceLevel {
    match per_day.value() {
        None => PerformanceLevel::Unknown,
        Some(f) if f >= 1.0 => PerformanceLevel::Elite,
        Some(f) if f >= 0.14 => PerformanceLevel::High,
        Some(f) if f >= 0.03 => PerformanceLevel::Medium,
        Some(_) => PerformanceLevel::Low,
    }
}

/// Lead time or time to restore, in minutes: within an hour, a day, a week.
pub fn classify_duration(minutes: Measured) -> PerformanceLevel {
    match minutes.value() {
        None => PerformanceLevel::Unknown,
        Some(m) if m <= HOUR_MINUTES => PerformanceLevel::Elite,
        Some(m) if m <= DAY_MINUTES => PerformanceLevel::High,
        Some(m) if m <= WEEK_MINUTES => PerformanceLevel::Medium,
        Some(_) => PerformanceLevel::Low,
    }
}

pub fn classify_change_failure_rate(rate: Measured) -> PerformanceLevel {
    match rate.value() {
        None => PerformanceLevel::Unknown,
        Some(r) if r <= 15.0 => PerformanceLevel::Elite,
        Some(r) if r <= 30.0 => PerformanceLevel::High,
        Some(r) if r <= 45.0 => PerformanceLevel::Medium,
        Some(_) => PerformanceLevel::Low,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoraClassification {
    pub deployments: u64,
    pub deployment_frequency: PerformanceLevel,
    pub lead_time: PerformanceLevel,
    pub change_failure_rate: PerformanceLevel,
    pub time_to_restore: PerformanceLevel,
    pub lead_time_minutes: Measured,
    pub failure_rate_percent: Measured,
}

pub fn classify(metrics: &DoraMetrics) -> DoraClassification {
    DoraClassification {
        deployments: metrics.deployment_frequency.total,
        deployment_frequency: classify_deployment_frequency(metrics.deployment_frequency.per_day),
        lead_time: classify_duration(metrics.lead_time.average),
        change_failure_rate: classify_change_failure_rate(metrics.change_failure_rate.rate),
        time_to_restore: classify_duration(metrics.mean_time_to_restore.average),
        lead_time_minutes: metrics.lead_time.average,
        failure_rate_percent: metrics.change_failure_rate.rate,
    }
}
