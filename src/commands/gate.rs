use super::{CommandContext, ExitStatus};
use crate::gate::build_gate_report;
use crate::io::{load_latest_snapshot, OutputWriter};
use crate::report::QualityReport;
use anyhow::Result;
use std::path::Path;

/// Evaluate the gate for the latest snapshot in `input`.
///
/// FAILED and CRITICAL verdicts map to [`ExitStatus::GateFailed`].
pub fn run_gate(
    input: &Path,
    ctx: &CommandContext,
    writer: &mut dyn OutputWriter,
) -> Result<ExitStatus> {
    let Some(snapshot) = load_latest_snapshot(input, ctx.project())? else {
        writer.write_no_data(ctx.project())?;
        return Ok(ExitStatus::NoData);
    };

    let gate = build_gate_report(&snapshot, &ctx.config);
    let verdict = gate.result.status;
    log::info!("Quality gate {} ({:?})", verdict, gate.result.rule);

    writer.write_report(&QualityReport::for_snapshot(&snapshot).with_gate(gate))?;

    Ok(if verdict.is_blocking() {
        ExitStatus::GateFailed
    } else {
        ExitStatus::Success
    })
}
