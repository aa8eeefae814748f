//! Dimension scoring for radar-style comparison.
//!
//! Each of the five dimensions is scored independently on 0..=100 from a
//! [`MetricsSnapshot`](crate::core::MetricsSnapshot). Unlike the gate,
//! scoring never leaves a dimension out: unmeasured ratings and
//! duplication take a neutral 50, while unmeasured coverage scores 0.

pub mod composite;
pub mod radar;

pub use composite::{composite_score, CompositeScore};
pub use radar::{
    grade_score, rating_to_score, score_dimensions, Dimension, DimensionScore, RadarRatings,
    RadarResult, NEUTRAL_SCORE,
};
