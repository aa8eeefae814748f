use super::radar::RadarResult;
use crate::core::Grade;
use serde::{Deserialize, Serialize};

/// Single 0..=100 figure summarising the five radar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub score: u8,
    pub band: Grade,
}

/// Rounded mean of the dimension scores.
pub fn composite_score(radar: &RadarResult) -> CompositeScore {
    let scores = radar.scores();
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let score = mean.round().clamp(0.0, 100.0) as u8;
    CompositeScore {
        score,
        band: band_for(score),
    }
}

fn band_for(score: u8) -> Grade {
    match score {
        80..=u8::MAX => Grade::A,
        60..=79 => Grade::B,
        40..=59 => Grade::C,
        20..=39 => Grade::D,
        _ => Grade::E,
    }
}
