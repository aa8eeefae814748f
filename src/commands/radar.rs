use super::{CommandContext, ExitStatus};
use crate::io::{load_latest_snapshot, OutputWriter};
use crate::report::{QualityReport, RadarReport};
use anyhow::Result;
use std::path::Path;

pub fn run_radar(
    input: &Path,
    ctx: &CommandContext,
    writer: &mut dyn OutputWriter,
) -> Result<ExitStatus> {
    let Some(snapshot) = load_latest_snapshot(input, ctx.project())? else {
        writer.write_no_data(ctx.project())?;
        return Ok(ExitStatus::NoData);
    };

    let radar = RadarReport::from_snapshot(&snapshot);
    log::debug!("Dimension scores: {:?}", radar.radar.scores());
    writer.write_report(&QualityReport::for_snapshot(&snapshot).with_radar(radar))?;
    Ok(ExitStatus::Success)
}
