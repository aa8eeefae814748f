use super::measure::{lenient_count, lenient_text, null_as_default, Measured};
use super::rating::Rating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One metrics reading for a project, as produced by the metrics source.
///
/// Snapshots are read-only: they are parsed, evaluated, and dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maintainability: Maintainability,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reliability: Reliability,
    #[serde(default, deserialize_with = "null_as_default")]
    pub security: Security,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coverage: Coverage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duplication: Duplication,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: Size,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_code: NewCode,
    #[serde(default)]
    pub overall_rating: Rating,
    #[serde(default)]
    pub technical_debt_minutes: Measured,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintainability {
    #[serde(default)]
    pub rating: Rating,
    /// Remediation effort as a percentage of development effort.
    #[serde(default)]
    pub debt_ratio: Measured,
    #[serde(default, deserialize_with = "lenient_count")]
    pub code_smells: u64,
    /// Remediation effort in minutes.
    #[serde(default)]
    pub technical_debt: Measured,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reliability {
    #[serde(default)]
    pub rating: Rating,
    #[serde(default, deserialize_with = "lenient_count")]
    pub bugs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    #[serde(default)]
    pub rating: Rating,
    #[serde(default, deserialize_with = "lenient_count")]
    pub vulnerabilities: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    #[serde(default)]
    pub overall: Measured,
    #[serde(default)]
    pub new: Measured,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Duplication {
    #[serde(default)]
    pub density: Measured,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    #[serde(default, deserialize_with = "lenient_count")]
    pub lines_of_code: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub complexity: u64,
}

/// Issues introduced since the new-code baseline (the leak period).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCode {
    #[serde(default, deserialize_with = "lenient_count")]
    pub bugs: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub vulnerabilities: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub code_smells: u64,
}

impl NewCode {
    pub fn has_defects(&self) -> bool {
        self.bugs > 0 || self.vulnerabilities > 0
    }
}

impl MetricsSnapshot {
    /// Snapshot with the three dimension ratings set and everything else default.
    pub fn with_ratings(
        maintainability: impl Into<Rating>,
        reliability: impl Into<Rating>,
        security: impl Into<Rating>,
    ) -> Self {
        let mut snapshot = Self::default();
        snapshot.maintainability.rating = maintainability.into();
        snapshot.reliability.rating = reliability.into();
        snapshot.security.rating = security.into();
        snapshot
    }

    /// The gated dimension ratings in evaluation order.
    pub fn dimension_ratings(&self) -> [Rating; 3] {
        [
            self.maintainability.rating,
            self.reliability.rating,
            self.security.rating,
        ]
    }

    pub fn belongs_to(&self, project: &str) -> bool {
        self.project_key.as_deref() == Some(project)
    }
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let text = lenient_text(d)?;
    Ok(text.and_then(|t| match DateTime::parse_from_rfc3339(t.trim()) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Ignoring unparsable snapshot timestamp {:?}: {}", t, e);
            None
        }
    }))
}
