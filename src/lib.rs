// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dora;
pub mod errors;
pub mod formatting;
pub mod gate;
pub mod io;
pub mod report;
pub mod scoring;
pub mod trend;

// Re-export commonly used types
pub use crate::core::{
    format_rating, Coverage, Duplication, Grade, Maintainability, Measured, MetricsSnapshot,
    NewCode, Rating, Reliability, Security, Size,
};

pub use crate::gate::{
    build_gate_report, evaluate_conditions, evaluate_quality_gate, evaluate_with_thresholds,
    recommend, GateReport, GateResult, GateRule, Verdict,
};

pub use crate::scoring::{
    composite_score, rating_to_score, score_dimensions, CompositeScore, Dimension,
    DimensionScore, RadarResult,
};

pub use crate::trend::{calculate_trend, debt_velocity, summarize_debt, DebtTrend, TrendDirection};

pub use crate::dora::{classify, DoraClassification, DoraMetrics, PerformanceLevel};

pub use crate::config::{load_config, QualityLensConfig};

pub use crate::errors::Error;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::{build_report, QualityReport};
