use super::{CommandContext, ExitStatus};
use crate::dora::classify;
use crate::io::{load_dora_metrics, OutputWriter};
use crate::report::QualityReport;
use anyhow::Result;
use std::path::Path;

pub fn run_dora(
    input: &Path,
    ctx: &CommandContext,
    writer: &mut dyn OutputWriter,
) -> Result<ExitStatus> {
    let Some(metrics) = load_dora_metrics(input)? else {
        writer.write_no_data(ctx.project())?;
        return Ok(ExitStatus::NoData);
    };

    let project = metrics.project_key.clone().or_else(|| ctx.project.clone());
    let classification = classify(&metrics);
    log::debug!("DORA classification: {:?}", classification);
    writer.write_report(&QualityReport::new(project).with_dora(classification))?;
    Ok(ExitStatus::Success)
}
