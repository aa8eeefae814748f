use serde::{Deserialize, Serialize};

/// Thresholds for the quality-gate verdict.
///
/// Ratings are on the 1 (A, best) to 5 (E, worst) scale.
///
/// ```toml
/// [gate]
/// critical_rating = 4.5        # maintainability at or past this is CRITICAL
/// failing_rating = 2.5         # a dimension at or past this counts toward FAILED
/// min_failing_dimensions = 2
/// warning_rating = 3.0         # any dimension exactly here is WARNING
/// max_debt_ratio = 5.0         # debt ratio above this is WARNING
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateThresholds {
    #[serde(default = "default_critical_rating")]
    pub critical_rating: f64,

    #[serde(default = "default_failing_rating")]
    pub failing_rating: f64,

    #[serde(default = "default_min_failing_dimensions")]
    pub min_failing_dimensions: usize,

    #[serde(default = "default_warning_rating")]
    pub warning_rating: f64,

    /// Percent
    #[serde(default = "default_gate_max_debt_ratio")]
    pub max_debt_ratio: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            critical_rating: default_critical_rating(),
            failing_rating: default_failing_rating(),
            min_failing_dimensions: default_min_failing_dimensions(),
            warning_rating: default_warning_rating(),
            max_debt_ratio: default_gate_max_debt_ratio(),
        }
    }
}

impl GateThresholds {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("critical_rating", self.critical_rating),
            ("failing_rating", self.failing_rating),
            ("warning_rating", self.warning_rating),
        ] {
            check_rating(name, value)?;
        }
        if !(1..=3).contains(&self.min_failing_dimensions) {
            return Err(format!(
                "min_failing_dimensions must be between 1 and 3, got {}",
                self.min_failing_dimensions
            ));
        }
        check_percent("max_debt_ratio", self.max_debt_ratio)
    }
}

/// Thresholds for the per-dimension gate conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionThresholds {
    /// Worst rating that still passes (default: 2.0, grade B)
    #[serde(default = "default_passing_rating")]
    pub passing_rating: f64,

    /// Maintainability passes only below this debt ratio
    #[serde(default = "default_condition_max_debt_ratio")]
    pub max_debt_ratio: f64,

    #[serde(default = "default_coverage_pass")]
    pub coverage_pass: f64,

    #[serde(default = "default_coverage_warning")]
    pub coverage_warning: f64,
}

impl Default for ConditionThresholds {
    fn default() -> Self {
        Self {
            passing_rating: default_passing_rating(),
            max_debt_ratio: default_condition_max_debt_ratio(),
            coverage_pass: default_coverage_pass(),
            coverage_warning: default_coverage_warning(),
        }
    }
}

impl ConditionThresholds {
    pub fn validate(&self) -> Result<(), String> {
        check_rating("passing_rating", self.passing_rating)?;
        check_percent("max_debt_ratio", self.max_debt_ratio)?;
        check_percent("coverage_pass", self.coverage_pass)?;
        check_percent("coverage_warning", self.coverage_warning)?;
        if self.coverage_warning > self.coverage_pass {
            return Err(format!(
                "coverage_warning ({}) must not exceed coverage_pass ({})",
                self.coverage_warning, self.coverage_pass
            ));
        }
        Ok(())
    }
}

/// Thresholds that trigger remediation recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    #[serde(default = "default_condition_max_debt_ratio")]
    pub max_debt_ratio: f64,

    #[serde(default = "default_coverage_pass")]
    pub min_coverage: f64,

    #[serde(default = "default_max_duplication")]
    pub max_duplication: f64,

    /// New-code smells tolerated before a review is recommended
    #[serde(default = "default_max_new_code_smells")]
    pub max_new_code_smells: u64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            max_debt_ratio: default_condition_max_debt_ratio(),
            min_coverage: default_coverage_pass(),
            max_duplication: default_max_duplication(),
            max_new_code_smells: default_max_new_code_smells(),
        }
    }
}

impl RecommendationThresholds {
    pub fn validate(&self) -> Result<(), String> {
        check_percent("max_debt_ratio", self.max_debt_ratio)?;
        check_percent("min_coverage", self.min_coverage)?;
        check_percent("max_duplication", self.max_duplication)
    }
}

fn check_rating(name: &str, value: f64) -> Result<(), String> {
    if (1.0..=5.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between 1.0 and 5.0, got {value}"))
    }
}

fn check_percent(name: &str, value: f64) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{name} must be a non-negative percentage, got {value}"))
    }
}

fn default_critical_rating() -> f64 {
    4.5
}
fn default_failing_rating() -> f64 {
    2.5
}
fn default_min_failing_dimensions() -> usize {
    2
}
fn default_warning_rating() -> f64 {
    3.0
}
fn default_gate_max_debt_ratio() -> f64 {
    5.0
}
fn default_passing_rating() -> f64 {
    2.0
}
fn default_condition_max_debt_ratio() -> f64 {
    10.0
}
fn default_coverage_pass() -> f64 {
    80.0
}
fn default_coverage_warning() -> f64 {
    60.0
}
fn default_max_duplication() -> f64 {
    5.0
}
fn default_max_new_code_smells() -> u64 {
    5
}
