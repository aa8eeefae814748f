use crate::core::{format_rating, Grade, Measured, MetricsSnapshot, Rating};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score given to a dimension whose rating was not measured.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Radar chart axes. The declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Reliability,
    Security,
    Maintainability,
    Coverage,
    CodeQuality,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Reliability,
        Dimension::Security,
        Dimension::Maintainability,
        Dimension::Coverage,
        Dimension::CodeQuality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Reliability => "Reliability",
            Dimension::Security => "Security",
            Dimension::Maintainability => "Maintainability",
            Dimension::Coverage => "Test Coverage",
            Dimension::CodeQuality => "Code Quality",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// 0 (worst) to 100 (best)
    pub score: f64,
}

/// Display values that accompany the radar scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarRatings {
    pub reliability: String,
    pub security: String,
    pub maintainability: String,
    pub coverage: String,
    pub code_quality: String,
}

impl RadarRatings {
    pub fn for_dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Reliability => &self.reliability,
            Dimension::Security => &self.security,
            Dimension::Maintainability => &self.maintainability,
            Dimension::Coverage => &self.coverage,
            Dimension::CodeQuality => &self.code_quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarResult {
    /// Always five entries, in [`Dimension::ALL`] order.
    pub dimensions: [DimensionScore; 5],
    pub ratings: RadarRatings,
}

impl RadarResult {
    pub fn scores(&self) -> [f64; 5] {
        self.dimensions.map(|d| d.score)
    }

    pub fn score_of(&self, dimension: Dimension) -> f64 {
        self.dimensions
            .iter()
            .find(|d| d.dimension == dimension)
            .map_or(NEUTRAL_SCORE, |d| d.score)
    }
}

/// A→100, B→75, C→50, D→25, E→0.
pub fn grade_score(grade: Grade) -> f64 {
    match grade {
        Grade::A => 100.0,
        Grade::B => 75.0,
        Grade::C => 50.0,
        Grade::D => 25.0,
        Grade::E => 0.0,
    }
}

/// Map any rating to 0..=100.
///
/// Unknown ratings, and numerics that are not grade points, take the
/// neutral midpoint so the chart always has a point to draw.
pub fn rating_to_score(rating: &Rating) -> f64 {
    rating.grade().map_or(NEUTRAL_SCORE, grade_score)
}

/// Unmeasured coverage scores 0.
fn coverage_score(coverage: Measured) -> f64 {
    coverage.value().map_or(0.0, |c| c.clamp(0.0, 100.0))
}

/// Inverse duplication density; unmeasured duplication is neutral.
fn code_quality_score(duplication: Measured) -> f64 {
    duplication
        .value()
        .map_or(NEUTRAL_SCORE, |d| (100.0 - d).clamp(0.0, 100.0))
}

pub fn score_dimensions(snapshot: &MetricsSnapshot) -> RadarResult {
    let reliability = rating_to_score(&snapshot.reliability.rating);
    let security = rating_to_score(&snapshot.security.rating);
    let maintainability = rating_to_score(&snapshot.maintainability.rating);
    let coverage = coverage_score(snapshot.coverage.overall);
    let code_quality = code_quality_score(snapshot.duplication.density);

    let scores = [reliability, security, maintainability, coverage, code_quality];
    let dimensions = std::array::from_fn(|i| DimensionScore {
        dimension: Dimension::ALL[i],
        score: scores[i],
    });

    let ratings = RadarRatings {
        reliability: format_rating(&snapshot.reliability.rating),
        security: format_rating(&snapshot.security.rating),
        maintainability: format_rating(&snapshot.maintainability.rating),
        coverage: if coverage > 0.0 {
            format!("{:.1}%", coverage)
        } else {
            "N/A".to_string()
        },
        code_quality: format!("{:.1}", code_quality),
    };

    RadarResult {
        dimensions,
        ratings,
    }
}
