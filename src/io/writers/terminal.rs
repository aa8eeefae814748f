use super::markdown::signed_minutes;
use crate::core::Grade;
use crate::dora::DoraClassification;
use crate::formatting::{
    format_coverage, format_lead_time, minutes_to_readable, style_condition, style_performance,
    style_verdict, ColoredFormatter, FormattingConfig, OutputFormatter,
};
use crate::gate::{ConditionStatus, GateReport};
use crate::io::output::{no_data_message, OutputWriter};
use crate::report::{KeyMetrics, QualityReport, RadarReport};
use crate::scoring::Dimension;
use crate::trend::DebtTrend;
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    ascii: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            ascii: !formatting.emoji.should_use_emoji(),
        }
    }

    fn table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.ascii {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header.to_vec());
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &QualityReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        if let Some(gate) = &report.gate {
            self.print_gate(gate)?;
        }
        if let Some(radar) = &report.radar {
            self.print_radar(radar)?;
        }
        if let Some(metrics) = &report.key_metrics {
            self.print_key_metrics(metrics)?;
        }
        if let Some(trend) = &report.trend {
            self.print_trend(trend)?;
        }
        if let Some(dora) = &report.dora {
            self.print_dora(dora)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_no_data(&mut self, project: Option<&str>) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{} {}",
            f.emoji("⚠", "[WARN]"),
            f.warning(&no_data_message(project))
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &QualityReport) -> anyhow::Result<()> {
        let title = match &report.project_key {
            Some(project) => format!("Quality Report: {project}"),
            None => "Quality Report".to_string(),
        };
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer, "{}", self.formatter.header(&"=".repeat(title.len())))?;
        if let Some(timestamp) = report.timestamp {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .dim(&format!("Measured {}", timestamp.format("%Y-%m-%d %H:%M UTC")))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_gate(&mut self, gate: &GateReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "Quality Gate: {}",
            style_verdict(f, gate.result.status)
        )?;
        writeln!(self.writer, "  {}", gate.result.message)?;
        writeln!(self.writer)?;

        let mut table = self.table(&["Condition", "Status", "Value", "Detail"]);
        for condition in &gate.conditions {
            table.add_row(vec![
                condition.name.to_string(),
                condition.status.label().to_string(),
                condition.value.clone(),
                condition.detail.clone(),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        let f = &self.formatter;
        let summary = &gate.summary;
        writeln!(
            self.writer,
            "  {} {}, {} {}, {} {}, {} {}",
            summary.passed,
            style_condition(f, ConditionStatus::Passed),
            summary.warnings,
            style_condition(f, ConditionStatus::Warning),
            summary.failed,
            style_condition(f, ConditionStatus::Failed),
            summary.unknown,
            style_condition(f, ConditionStatus::Unknown),
        )?;
        writeln!(self.writer)?;

        if !gate.recommendations.is_empty() {
            writeln!(self.writer, "{} Recommendations:", f.emoji("💡", "*"))?;
            for recommendation in &gate.recommendations {
                writeln!(self.writer, "  - {recommendation}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn print_radar(&mut self, radar: &RadarReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Quality Dimensions"))?;
        let mut table = self.table(&["Dimension", "Score", "Rating"]);
        for dimension in Dimension::ALL {
            table.add_row(vec![
                dimension.label().to_string(),
                format!("{:.1}", radar.radar.score_of(dimension)),
                radar.radar.ratings.for_dimension(dimension).to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        let composite = format!("{} ({})", radar.composite.score, radar.composite.band);
        let composite = match radar.composite.band {
            Grade::A | Grade::B => self.formatter.success(&composite),
            Grade::C => self.formatter.warning(&composite),
            _ => self.formatter.error(&composite),
        };
        writeln!(self.writer, "  Overall score: {composite}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_key_metrics(&mut self, metrics: &KeyMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Key Metrics"))?;
        let mut table = self.table(&["Metric", "Value", "New Code"]);
        let rows = [
            ["Overall Rating", metrics.overall_rating.as_str(), ""],
            ["Lines of Code", metrics.lines_of_code.as_str(), ""],
            ["Technical Debt", metrics.technical_debt.as_str(), ""],
            ["Duplication", metrics.duplication.as_str(), ""],
        ];
        table.add_row(vec![
            "Bugs".to_string(),
            metrics.bugs.to_string(),
            metrics.new_code.bugs.to_string(),
        ]);
        table.add_row(vec![
            "Vulnerabilities".to_string(),
            metrics.vulnerabilities.to_string(),
            metrics.new_code.vulnerabilities.to_string(),
        ]);
        table.add_row(vec![
            "Code Smells".to_string(),
            metrics.code_smells.to_string(),
            metrics.new_code.code_smells.to_string(),
        ]);
        table.add_row(vec![
            "Coverage".to_string(),
            metrics.coverage.clone(),
            metrics.new_code_coverage.clone(),
        ]);
        for row in rows {
            table.add_row(row.to_vec());
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_trend(&mut self, trend: &DebtTrend) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Technical Debt Trend"))?;
        writeln!(
            self.writer,
            "  Current: {}  Velocity: {} {}  ({} snapshots)",
            minutes_to_readable(trend.latest_minutes.max(0.0) as u64),
            signed_minutes(trend.velocity),
            trend.direction.arrow(),
            trend.snapshots
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_dora(&mut self, dora: &DoraClassification) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("DORA Metrics"))?;
        let f = &self.formatter;
        let lines = [
            (
                "Deployment Frequency",
                format!("{} deployments", dora.deployments),
                style_performance(f, dora.deployment_frequency),
            ),
            (
                "Lead Time",
                format_lead_time(dora.lead_time_minutes),
                style_performance(f, dora.lead_time),
            ),
            (
                "Change Failure Rate",
                format_coverage(dora.failure_rate_percent),
                style_performance(f, dora.change_failure_rate),
            ),
            (
                "Time to Restore",
                "-".to_string(),
                style_performance(f, dora.time_to_restore),
            ),
        ];
        for (name, value, level) in lines {
            writeln!(self.writer, "  {name:<22} {value:<18} {level}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QualityLensConfig;
    use crate::core::{Grade, MetricsSnapshot};
    use crate::report::build_report;

    fn render(report: &QualityReport) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_plain_report_has_no_ansi_codes() {
        let mut snapshot = MetricsSnapshot::with_ratings(Grade::C, Grade::C, Grade::A);
        snapshot.project_key = Some("api".to_string());
        let output = render(&build_report(&snapshot, &[], &QualityLensConfig::default()));

        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("Quality Report: api"));
        assert!(output.contains("[FAIL] FAILED"));
        assert!(output.contains("Test Coverage"));
        assert!(output.contains("Overall score:"));
    }

    #[test]
    fn test_no_data_message() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_no_data(Some("web"))
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[WARN] No data available for project web.\n"
        );
    }
}
