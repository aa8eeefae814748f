//! Configuration loaded from `.qualitylens.toml`.
//!
//! Every section is optional. Missing sections and fields take the
//! documented defaults; invalid sections are replaced by defaults with a
//! warning. The loaded configuration is passed explicitly to the commands
//! that need it rather than cached globally.

mod core;
mod loader;
mod thresholds;

pub use self::core::{OutputConfig, ProjectConfig, QualityLensConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{ConditionThresholds, GateThresholds, RecommendationThresholds};

/// Default configuration file written by `qualitylens init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# qualitylens configuration

[gate]
critical_rating = 4.5
failing_rating = 2.5
min_failing_dimensions = 2
warning_rating = 3.0
max_debt_ratio = 5.0

[conditions]
passing_rating = 2.0
max_debt_ratio = 10.0
coverage_pass = 80.0
coverage_warning = 60.0

[recommendations]
max_debt_ratio = 10.0
min_coverage = 80.0
max_duplication = 5.0
max_new_code_smells = 5

[output]
default_format = "terminal"

[project]
# default = "my-project-key"
"#;
