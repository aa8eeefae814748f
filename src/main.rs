use anyhow::Result;
use qualitylens::cli::{init_logging, parse_args, Commands, CommonArgs};
use qualitylens::commands::{
    self, run_dora, run_gate, run_radar, run_report, run_trend, CommandContext, ExitStatus,
};
use qualitylens::io::OutputWriter;
use std::path::Path;

type Runner = fn(&Path, &CommandContext, &mut dyn OutputWriter) -> Result<ExitStatus>;

fn main() {
    let cli = parse_args();

    let outcome = match cli.command {
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force).map(|()| ExitStatus::Success)
        }
        Commands::Gate { input, common } => evaluate(run_gate, &input, &common),
        Commands::Radar { input, common } => evaluate(run_radar, &input, &common),
        Commands::Report { input, common } => evaluate(run_report, &input, &common),
        Commands::Trend { history, common } => evaluate(run_trend, &history, &common),
        Commands::Dora { input, common } => evaluate(run_dora, &input, &common),
    };

    match outcome {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

// Shared setup for every evaluating command
fn evaluate(run: Runner, input: &Path, common: &CommonArgs) -> Result<ExitStatus> {
    init_logging(common.verbosity);
    let ctx = CommandContext::from_args(common)?;
    let mut writer = ctx.writer();
    run(input, &ctx, writer.as_mut())
}
