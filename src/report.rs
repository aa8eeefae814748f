//! The document every command renders.
//!
//! Each command fills in the sections it computes and leaves the rest
//! empty; writers render whichever sections are present.

use crate::config::QualityLensConfig;
use crate::core::{format_rating, MetricsSnapshot, NewCode};
use crate::dora::DoraClassification;
use crate::formatting::{format_coverage, format_number, minutes_to_days};
use crate::gate::{build_gate_report, GateReport};
use crate::scoring::{composite_score, score_dimensions, CompositeScore, RadarResult};
use crate::trend::{summarize_debt, DebtTrend};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarReport {
    pub radar: RadarResult,
    pub composite: CompositeScore,
}

impl RadarReport {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let radar = score_dimensions(snapshot);
        let composite = composite_score(&radar);
        Self { radar, composite }
    }
}

/// Headline figures, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub overall_rating: String,
    pub bugs: u64,
    pub vulnerabilities: u64,
    pub code_smells: u64,
    pub coverage: String,
    pub new_code_coverage: String,
    pub duplication: String,
    pub technical_debt: String,
    pub lines_of_code: String,
    pub new_code: NewCode,
}

impl KeyMetrics {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        // Older snapshots only carry the debt inside the maintainability block.
        let debt = if snapshot.technical_debt_minutes.is_known() {
            snapshot.technical_debt_minutes
        } else {
            snapshot.maintainability.technical_debt
        };

        Self {
            overall_rating: format_rating(&snapshot.overall_rating),
            bugs: snapshot.reliability.bugs,
            vulnerabilities: snapshot.security.vulnerabilities,
            code_smells: snapshot.maintainability.code_smells,
            coverage: format_coverage(snapshot.coverage.overall),
            new_code_coverage: format_coverage(snapshot.coverage.new),
            duplication: format_coverage(snapshot.duplication.density),
            technical_debt: minutes_to_days(debt),
            lines_of_code: format_number(snapshot.size.lines_of_code),
            new_code: snapshot.new_code,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<GateReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metrics: Option<KeyMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<DebtTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dora: Option<DoraClassification>,
}

impl QualityReport {
    pub fn new(project_key: Option<String>) -> Self {
        Self {
            project_key,
            ..Self::default()
        }
    }

    /// Report headed by a snapshot's project key and timestamp.
    pub fn for_snapshot(snapshot: &MetricsSnapshot) -> Self {
        Self {
            project_key: snapshot.project_key.clone(),
            timestamp: snapshot.timestamp,
            ..Self::default()
        }
    }

    pub fn with_gate(mut self, gate: GateReport) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_radar(mut self, radar: RadarReport) -> Self {
        self.radar = Some(radar);
        self
    }

    pub fn with_key_metrics(mut self, metrics: KeyMetrics) -> Self {
        self.key_metrics = Some(metrics);
        self
    }

    pub fn with_trend(mut self, trend: Option<DebtTrend>) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_dora(mut self, dora: DoraClassification) -> Self {
        self.dora = Some(dora);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.gate.is_none()
            && self.radar.is_none()
            && self.key_metrics.is_none()
            && self.trend.is_none()
            && self.dora.is_none()
    }
}

/// Full report for the latest snapshot: gate, radar, key metrics, and the
/// debt trend when a history is available.
pub fn build_report(
    latest: &MetricsSnapshot,
    history: &[MetricsSnapshot],
    config: &QualityLensConfig,
) -> QualityReport {
    let trend = if history.len() > 1 {
        summarize_debt(history)
    } else {
        None
    };

    QualityReport::for_snapshot(latest)
        .with_gate(build_gate_report(latest, config))
        .with_radar(RadarReport::from_snapshot(latest))
        .with_key_metrics(KeyMetrics::from_snapshot(latest))
        .with_trend(trend)
}
