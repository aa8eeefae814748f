use serde::{Deserialize, Serialize};

use super::thresholds::{ConditionThresholds, GateThresholds, RecommendationThresholds};

/// Root configuration structure, read from `.qualitylens.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QualityLensConfig {
    /// Quality-gate verdict thresholds
    #[serde(default)]
    pub gate: Option<GateThresholds>,

    /// Per-dimension condition thresholds
    #[serde(default)]
    pub conditions: Option<ConditionThresholds>,

    /// Recommendation triggers
    #[serde(default)]
    pub recommendations: Option<RecommendationThresholds>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Project selection
    #[serde(default)]
    pub project: Option<ProjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    pub default_format: Option<String>,
    #[serde(default)]
    pub plain: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Project key used when `--project` is not given
    pub default: Option<String>,
}

impl QualityLensConfig {
    pub fn gate_thresholds(&self) -> GateThresholds {
        self.gate.clone().unwrap_or_default()
    }

    pub fn condition_thresholds(&self) -> ConditionThresholds {
        self.conditions.clone().unwrap_or_default()
    }

    pub fn recommendation_thresholds(&self) -> RecommendationThresholds {
        self.recommendations.clone().unwrap_or_default()
    }

    pub fn default_project(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.default.as_deref())
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.default_format.as_deref())
    }

    pub fn plain_output(&self) -> bool {
        self.output.as_ref().is_some_and(|o| o.plain)
    }

    /// Replace any invalid section with its defaults, logging why.
    pub fn sanitize(&mut self) {
        if let Some(Err(e)) = self.gate.as_ref().map(GateThresholds::validate) {
            log::warn!("Invalid [gate] thresholds: {}. Using defaults.", e);
            self.gate = Some(GateThresholds::default());
        }
        if let Some(Err(e)) = self.conditions.as_ref().map(ConditionThresholds::validate) {
            log::warn!("Invalid [conditions] thresholds: {}. Using defaults.", e);
            self.conditions = Some(ConditionThresholds::default());
        }
        if let Some(Err(e)) = self
            .recommendations
            .as_ref()
            .map(RecommendationThresholds::validate)
        {
            log::warn!("Invalid [recommendations] thresholds: {}. Using defaults.", e);
            self.recommendations = Some(RecommendationThresholds::default());
        }
    }
}
