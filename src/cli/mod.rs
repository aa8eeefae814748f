//! CLI module for qualitylens
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, CommonArgs, OutputFormat};
pub use setup::{create_formatting_config, init_logging, verbosity_level};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
