//! CLI command implementations for qualitylens.
//!
//! Available commands:
//! - **gate**: Evaluate the quality gate for the latest snapshot
//! - **radar**: Score the five quality dimensions
//! - **report**: Gate, radar and key metrics together
//! - **trend**: Technical-debt trend across a history
//! - **dora**: Classify DORA delivery metrics
//! - **init**: Write a default configuration file
//!
//! Evaluating commands load their input, render through an
//! [`OutputWriter`](crate::io::OutputWriter), and report an [`ExitStatus`].

pub mod context;
pub mod dora;
pub mod gate;
pub mod init;
pub mod radar;
pub mod report;
pub mod trend;

pub use context::CommandContext;
pub use dora::run_dora;
pub use gate::run_gate;
pub use init::{init_config, init_config_at};
pub use radar::run_radar;
pub use report::run_report;
pub use trend::run_trend;

/// How a command finished, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output produced; for `gate`, the verdict was PASSED or WARNING.
    Success,
    /// The gate verdict was FAILED or CRITICAL.
    GateFailed,
    /// The input held no usable data.
    NoData,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::GateFailed => 1,
            ExitStatus::NoData => 2,
        }
    }
}
