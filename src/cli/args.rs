use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qualitylens")]
#[command(about = "Quality-gate evaluation and dimension scoring for code-quality snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the quality gate for the latest snapshot
    Gate {
        /// Snapshot or history JSON file (`-` for stdin)
        input: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Score the five quality dimensions and the overall composite
    Radar {
        /// Snapshot or history JSON file (`-` for stdin)
        input: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Gate, dimension scores and key metrics in one document
    Report {
        /// Snapshot or history JSON file (`-` for stdin)
        input: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Technical-debt trend and velocity across a snapshot history
    Trend {
        /// History JSON file (`-` for stdin)
        history: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Classify DORA delivery metrics into performance levels
    Dora {
        /// DORA metrics JSON file (`-` for stdin)
        input: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Initialize a qualitylens configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Options shared by every evaluating command.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Project key to select from the input
    #[arg(short, long, env = "QUALITYLENS_PROJECT")]
    pub project: Option<String>,

    /// Output format (defaults to the configured format, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .qualitylens.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Plain output without colors or emoji
    #[arg(long)]
    pub plain: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_gate_arguments() {
        let cli = Cli::try_parse_from([
            "qualitylens",
            "gate",
            "-",
            "--project",
            "api",
            "--format",
            "json",
            "-vv",
            "--plain",
        ])
        .unwrap();
        match cli.command {
            Commands::Gate { input, common } => {
                assert_eq!(input, PathBuf::from("-"));
                assert_eq!(common.project.as_deref(), Some("api"));
                assert_eq!(common.format, Some(OutputFormat::Json));
                assert_eq!(common.verbosity, 2);
                assert!(common.plain);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_init_force_flag() {
        let cli = Cli::try_parse_from(["qualitylens", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
