use super::{CommandContext, ExitStatus};
use crate::io::{load_history, select_latest, OutputWriter};
use crate::report::QualityReport;
use crate::trend::summarize_debt;
use anyhow::Result;
use std::path::Path;

/// Debt trend across the selected project's history. A history in which
/// no snapshot reports debt minutes has no data.
pub fn run_trend(
    history_path: &Path,
    ctx: &CommandContext,
    writer: &mut dyn OutputWriter,
) -> Result<ExitStatus> {
    let history = load_history(history_path, ctx.project())?;
    let Some(trend) = summarize_debt(&history) else {
        writer.write_no_data(ctx.project())?;
        return Ok(ExitStatus::NoData);
    };

    let report = match select_latest(&history) {
        Some(latest) => QualityReport::for_snapshot(&latest),
        None => QualityReport::new(ctx.project.clone()),
    };
    writer.write_report(&report.with_trend(Some(trend)))?;
    Ok(ExitStatus::Success)
}
