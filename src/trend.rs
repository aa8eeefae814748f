//! Technical-debt trend across a snapshot history.

use crate::core::MetricsSnapshot;
use serde::{Deserialize, Serialize};

/// Relative change, in percent, below which a value is considered stable.
pub const STABLE_BAND_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
            TrendDirection::Stable => "→",
        }
    }
}

/// Direction of change from `previous` to `current`.
///
/// With no previous value, or a previous value of zero, there is nothing to
/// compare against and the trend is stable.
pub fn calculate_trend(current: f64, previous: Option<f64>) -> TrendDirection {
    let Some(previous) = previous.filter(|p| *p != 0.0) else {
        return TrendDirection::Stable;
    };
    let change = (current - previous) / previous * 100.0;
    if change.abs() < STABLE_BAND_PERCENT {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtTrend {
    pub latest_minutes: f64,
    pub previous_minutes: Option<f64>,
    /// Minutes of debt added since the previous snapshot (negative when paid down).
    pub velocity: f64,
    pub direction: TrendDirection,
    pub snapshots: usize,
}

/// Snapshots in chronological order.
///
/// Sorted by timestamp when every snapshot has one; otherwise the input
/// order is taken as chronological.
pub fn chronological(history: &[MetricsSnapshot]) -> Vec<&MetricsSnapshot> {
    let mut ordered: Vec<&MetricsSnapshot> = history.iter().collect();
    if ordered.iter().all(|s| s.timestamp.is_some()) {
        ordered.sort_by_key(|s| s.timestamp);
    }
    ordered
}

fn debt_series(history: &[MetricsSnapshot]) -> Vec<f64> {
    chronological(history)
        .into_iter()
        .filter_map(|s| s.technical_debt_minutes.value())
        .collect()
}

/// Change in technical-debt minutes between the two most recent snapshots
/// that report it; 0 with fewer than two.
pub fn debt_velocity(history: &[MetricsSnapshot]) -> f64 {
    match debt_series(history).as_slice() {
        [.., previous, latest] => latest - previous,
        _ => 0.0,
    }
}

/// Summarise the debt trend; `None` when no snapshot reports debt minutes.
pub fn summarize_debt(history: &[MetricsSnapshot]) -> Option<DebtTrend> {
    let series = debt_series(history);
    let (&latest, earlier) = series.split_last()?;
    let previous = earlier.last().copied();

    Some(DebtTrend {
        latest_minutes: latest,
        previous_minutes: previous,
        velocity: previous.map_or(0.0, |p| latest - p),
        direction: calculate_trend(latest, previous),
        snapshots: series.len(),
    })
}
