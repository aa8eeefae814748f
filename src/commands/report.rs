use super::{CommandContext, ExitStatus};
use crate::io::{load_history, select_latest, OutputWriter};
use crate::report::build_report;
use anyhow::Result;
use std::path::Path;

/// Full report for the latest snapshot. A history input also yields the
/// debt trend.
pub fn run_report(
    input: &Path,
    ctx: &CommandContext,
    writer: &mut dyn OutputWriter,
) -> Result<ExitStatus> {
    let history = load_history(input, ctx.project())?;
    let Some(latest) = select_latest(&history) else {
        writer.write_no_data(ctx.project())?;
        return Ok(ExitStatus::NoData);
    };

    writer.write_report(&build_report(&latest, &history, &ctx.config))?;
    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{input_file, RecordingWriter};
    use tempfile::TempDir;

    #[test]
    fn test_report_over_history_includes_trend() {
        let dir = TempDir::new().unwrap();
        let path = input_file(
            &dir,
            r#"[
                {"projectKey": "api", "timestamp": "2025-03-01T00:00:00Z", "technicalDebtMinutes": 400},
                {"projectKey": "api", "timestamp": "2025-03-08T00:00:00Z", "technicalDebtMinutes": 500}
            ]"#,
        );
        let mut writer = RecordingWriter::default();
        let status = run_report(&path, &CommandContext::default(), &mut writer).unwrap();

        assert_eq!(status, ExitStatus::Success);
        let report = &writer.reports[0];
        assert!(report.gate.is_some());
        assert!(report.radar.is_some());
        assert_eq!(report.trend.as_ref().map(|t| t.velocity), Some(100.0));
        assert_eq!(
            report.key_metrics.as_ref().map(|m| m.technical_debt.as_str()),
            Some("8h")
        );
    }

    #[test]
    fn test_null_input_is_no_data() {
        let dir = TempDir::new().unwrap();
        let path = input_file(&dir, "null");
        let mut writer = RecordingWriter::default();
        let status = run_report(&path, &CommandContext::default(), &mut writer).unwrap();
        assert_eq!(status, ExitStatus::NoData);
        assert_eq!(writer.no_data.len(), 1);
    }
}
