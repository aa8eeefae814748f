//! Core data model: ratings, measurements, and the metrics snapshot.

pub mod measure;
pub mod rating;
pub mod snapshot;

pub use measure::Measured;
pub use rating::{format_rating, Grade, Rating};
pub use snapshot::{
    Coverage, Duplication, Maintainability, MetricsSnapshot, NewCode, Reliability, Security, Size,
};
