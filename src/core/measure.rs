//! Lenient scalar parsing at the JSON boundary.
//!
//! The metrics source reports unmeasured values in several ways: a missing
//! key, `null`, the wildcard string `"*"`, or a number serialized as a
//! string. Everything here maps those shapes onto explicit Rust types so
//! that the evaluation core never sees a sentinel.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A scalar as it appeared in the source document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawScalar {
    Number(f64),
    Text(String),
    Absent,
}

impl RawScalar {
    /// Numeric view: numbers, or strings that parse as finite numbers.
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

struct RawScalarVisitor;

impl<'de> Visitor<'de> for RawScalarVisitor {
    type Value = RawScalar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a string, or null")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawScalar, E> {
        Ok(RawScalar::Absent)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawScalar, E> {
        Ok(RawScalar::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawScalar, E> {
        Ok(RawScalar::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawScalar, E> {
        Ok(RawScalar::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawScalar, E> {
        Ok(RawScalar::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawScalar, E> {
        Ok(RawScalar::Text(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawScalar, E> {
        Ok(RawScalar::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawScalar, E> {
        Ok(RawScalar::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<RawScalar, D::Error> {
        d.deserialize_any(RawScalarVisitor)
    }

    // Nested structures where a scalar was expected are drained and
    // treated as not measured.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawScalar, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawScalar::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawScalar, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawScalar::Absent)
    }
}

impl<'de> Deserialize<'de> for RawScalar {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(RawScalarVisitor)
    }
}

/// A measurement that may not have been taken.
///
/// `Unknown` is distinct from zero: a project with unknown coverage has not
/// reported coverage, while one with `Value(0.0)` has no covered lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measured {
    Value(f64),
    #[default]
    Unknown,
}

impl Measured {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Known and strictly greater than `threshold`.
    pub fn exceeds(self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v > threshold)
    }

    /// Known and strictly below `threshold`.
    pub fn falls_below(self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v < threshold)
    }
}

impl From<f64> for Measured {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Self::Value(v)
        } else {
            Self::Unknown
        }
    }
}

impl From<Option<f64>> for Measured {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Unknown, Self::from)
    }
}

impl Serialize for Measured {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => s.serialize_f64(*v),
            Self::Unknown => s.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Measured {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawScalar::deserialize(d)?;
        Ok(raw.as_number().into())
    }
}

/// Deserialize an issue count. Absence means "no issues reported", so
/// anything missing or unparsable is 0, and negatives clamp to 0.
pub fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let raw = RawScalar::deserialize(d)?;
    Ok(raw
        .as_number()
        .filter(|n| *n > 0.0)
        .map_or(0, |n| n.trunc() as u64))
}

/// Deserialize an optional free-text field, accepting numbers as text.
pub fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = RawScalar::deserialize(d)?;
    Ok(match raw {
        RawScalar::Text(s) if !s.trim().is_empty() && s.trim() != "*" => Some(s),
        RawScalar::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserialize a nested record where `null` stands for "all defaults".
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default)]
        percent: Measured,
        #[serde(default, deserialize_with = "lenient_count")]
        count: u64,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_measured_accepts_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"percent": 42.5}"#).percent, Measured::Value(42.5));
        assert_eq!(probe(r#"{"percent": "42.5"}"#).percent, Measured::Value(42.5));
        assert_eq!(probe(r#"{"percent": 0}"#).percent, Measured::Value(0.0));
    }

    #[test]
    fn test_measured_unknown_is_not_zero() {
        assert_eq!(probe(r#"{"percent": "*"}"#).percent, Measured::Unknown);
        assert_eq!(probe(r#"{"percent": null}"#).percent, Measured::Unknown);
        assert_eq!(probe(r#"{}"#).percent, Measured::Unknown);
        assert_eq!(probe(r#"{"percent": {"x": 1}}"#).percent, Measured::Unknown);
        assert_ne!(Measured::Unknown, Measured::Value(0.0));
    }

    #[test]
    fn test_count_defaults_to_zero() {
        assert_eq!(probe(r#"{}"#).count, 0);
        assert_eq!(probe(r#"{"count": "*"}"#).count, 0);
        assert_eq!(probe(r#"{"count": -3}"#).count, 0);
        assert_eq!(probe(r#"{"count": "7"}"#).count, 7);
        assert_eq!(probe(r#"{"count": 2}"#).count, 2);
    }

    #[test]
    fn test_threshold_helpers_ignore_unknown() {
        assert!(!Measured::Unknown.exceeds(5.0));
        assert!(!Measured::Unknown.falls_below(80.0));
        assert!(Measured::Value(5.1).exceeds(5.0));
        assert!(!Measured::Value(5.0).exceeds(5.0));
    }

    #[test]
    fn test_measured_serializes_unknown_as_null() {
        assert_eq!(serde_json::to_string(&Measured::Unknown).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Measured::Value(1.5)).unwrap(), "1.5");
    }
}
