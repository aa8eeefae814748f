//! Letter grades and the ratings that carry them.
//!
//! A rating arrives either as a letter (`"A"`..`"E"`), as its numeric
//! equivalent (`1.0`..`5.0`, lower is better), or not at all. `Rating`
//! keeps those cases apart so that an unmeasured dimension can never be
//! mistaken for a grade.

use super::measure::RawScalar;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Quality grade, `A` best through `E` worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    /// Numeric equivalent on the 1 (best) to 5 (worst) scale.
    pub const fn numeric(self) -> f64 {
        match self {
            Grade::A => 1.0,
            Grade::B => 2.0,
            Grade::C => 3.0,
            Grade::D => 4.0,
            Grade::E => 5.0,
        }
    }

    /// Exact inverse of [`Grade::numeric`]. Values between grade points
    /// have no letter.
    pub fn from_numeric(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.numeric() == value)
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "E" => Some(Grade::E),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A dimension rating as reported by the metrics source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    Letter(Grade),
    /// Numeric form as received. May sit between grade points or outside
    /// the 1..=5 scale; see [`Rating::numeric`].
    Numeric(f64),
    #[default]
    Unknown,
}

impl Rating {
    /// Parse the textual form: a letter, a number, or anything else as unknown.
    pub fn parse(raw: &str) -> Self {
        if let Some(grade) = Grade::from_letter(raw) {
            return Rating::Letter(grade);
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Rating::Numeric(n),
            _ => Rating::Unknown,
        }
    }

    /// The grade, if this rating sits exactly on a grade point.
    pub fn grade(&self) -> Option<Grade> {
        match self {
            Rating::Letter(g) => Some(*g),
            Rating::Numeric(n) => Grade::from_numeric(*n),
            Rating::Unknown => None,
        }
    }

    /// Value on the 1 (best) to 5 (worst) scale.
    ///
    /// `None` for unknown ratings and for numerics outside `1.0..=5.0`;
    /// such ratings take part in no threshold comparison.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Rating::Letter(g) => Some(g.numeric()),
            Rating::Numeric(n) if (1.0..=5.0).contains(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Rating::Unknown)
    }
}

impl From<Grade> for Rating {
    fn from(grade: Grade) -> Self {
        Rating::Letter(grade)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rating(self))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Letter(g) => s.serialize_char(g.letter()),
            Rating::Numeric(n) => s.serialize_f64(*n),
            Rating::Unknown => s.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(match RawScalar::deserialize(d)? {
            RawScalar::Text(s) => Rating::parse(&s),
            RawScalar::Number(n) if n.is_finite() => Rating::Numeric(n),
            _ => Rating::Unknown,
        })
    }
}

/// Display form of a rating.
///
/// Grade points render as their letter. A numeric that is not a grade point
/// passes through unchanged, and an unknown rating renders as `N/A`.
pub fn format_rating(rating: &Rating) -> String {
    match rating {
        Rating::Letter(g) => g.to_string(),
        Rating::Numeric(n) => Grade::from_numeric(*n)
            .map(|g| g.to_string())
            .unwrap_or_else(|| n.to_string()),
        Rating::Unknown => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_numeric_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_numeric(grade.numeric()), Some(grade));
            assert_eq!(Rating::Numeric(grade.numeric()).grade(), Some(grade));
        }
    }

    #[test]
    fn test_parse_accepts_letters_and_numbers() {
        assert_eq!(Rating::parse("a"), Rating::Letter(Grade::A));
        assert_eq!(Rating::parse(" E "), Rating::Letter(Grade::E));
        assert_eq!(Rating::parse("2.0"), Rating::Numeric(2.0));
        assert_eq!(Rating::parse("*"), Rating::Unknown);
        assert_eq!(Rating::parse(""), Rating::Unknown);
    }

    #[test]
    fn test_numeric_excludes_out_of_scale_values() {
        assert_eq!(Rating::Numeric(0.0).numeric(), None);
        assert_eq!(Rating::Numeric(6.0).numeric(), None);
        assert_eq!(Rating::Numeric(2.7).numeric(), Some(2.7));
        assert_eq!(Rating::Unknown.numeric(), None);
    }

    #[test]
    fn test_format_rating_passes_through_non_grade_points() {
        assert_eq!(format_rating(&Rating::Numeric(3.0)), "C");
        assert_eq!(format_rating(&Rating::Letter(Grade::B)), "B");
        assert_eq!(format_rating(&Rating::Numeric(2.7)), "2.7");
        assert_eq!(format_rating(&Rating::Unknown), "N/A");
    }

    #[test]
    fn test_rating_deserialization() {
        let ratings: Vec<Rating> =
            serde_json::from_str(r#"["B", 4, "5.0", "*", null, true]"#).unwrap();
        assert_eq!(
            ratings,
            vec![
                Rating::Letter(Grade::B),
                Rating::Numeric(4.0),
                Rating::Numeric(5.0),
                Rating::Unknown,
                Rating::Unknown,
                Rating::Unknown,
            ]
        );
    }
}
