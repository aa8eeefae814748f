use crate::dora::DoraClassification;
use crate::formatting::{format_coverage, format_lead_time, minutes_to_readable};
use crate::gate::GateReport;
use crate::io::output::{no_data_message, OutputWriter};
use crate::report::{KeyMetrics, QualityReport, RadarReport};
use crate::scoring::Dimension;
use crate::trend::DebtTrend;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &QualityReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        if let Some(gate) = &report.gate {
            self.write_gate(gate)?;
        }
        if let Some(radar) = &report.radar {
            self.write_radar(radar)?;
        }
        if let Some(metrics) = &report.key_metrics {
            self.write_key_metrics(metrics)?;
        }
        if let Some(trend) = &report.trend {
            self.write_trend(trend)?;
        }
        if let Some(dora) = &report.dora {
            self.write_dora(dora)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_no_data(&mut self, project: Option<&str>) -> anyhow::Result<()> {
        writeln!(self.writer, "# Quality Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "_{}_", no_data_message(project))?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &QualityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Quality Report")?;
        writeln!(self.writer)?;
        if let Some(project) = &report.project_key {
            writeln!(self.writer, "Project: `{project}`")?;
        }
        if let Some(timestamp) = report.timestamp {
            writeln!(
                self.writer,
                "Measured: {}",
                timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table_header(&mut self, columns: &[&str]) -> anyhow::Result<()> {
        writeln!(self.writer, "| {} |", columns.join(" | "))?;
        let rule: Vec<String> = columns.iter().map(|c| "-".repeat(c.len().max(3))).collect();
        writeln!(self.writer, "|{}|", rule.join("|"))?;
        Ok(())
    }

    fn write_gate(&mut self, gate: &GateReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Quality Gate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Status: {}** - {}",
            gate.result.status.label().to_uppercase(),
            gate.result.message
        )?;
        writeln!(self.writer)?;

        self.write_table_header(&["Condition", "Status", "Value", "Detail"])?;
        for condition in &gate.conditions {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                condition.name,
                condition.status.label(),
                condition.value,
                condition.detail
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} passed, {} warnings, {} failed, {} unknown",
            gate.summary.passed, gate.summary.warnings, gate.summary.failed, gate.summary.unknown
        )?;
        writeln!(self.writer)?;

        if !gate.recommendations.is_empty() {
            writeln!(self.writer, "### Recommendations")?;
            writeln!(self.writer)?;
            for recommendation in &gate.recommendations {
                writeln!(self.writer, "- [ ] {recommendation}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_radar(&mut self, radar: &RadarReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Quality Dimensions")?;
        writeln!(self.writer)?;
        self.write_table_header(&["Dimension", "Score", "Rating"])?;
        for dimension in Dimension::ALL {
            writeln!(
                self.writer,
                "| {} | {:.1} | {} |",
                dimension,
                radar.radar.score_of(dimension),
                radar.radar.ratings.for_dimension(dimension)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Overall score: {} ({})**",
            radar.composite.score, radar.composite.band
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_key_metrics(&mut self, metrics: &KeyMetrics) -> anyhow::Result<()> {
        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        self.write_table_header(&["Metric", "Value"])?;
        let rows = [
            ("Overall Rating", metrics.overall_rating.clone()),
            ("Bugs", metrics.bugs.to_string()),
            ("Vulnerabilities", metrics.vulnerabilities.to_string()),
            ("Code Smells", metrics.code_smells.to_string()),
            ("Coverage", metrics.coverage.clone()),
            ("New Code Coverage", metrics.new_code_coverage.clone()),
            ("Duplication", metrics.duplication.clone()),
            ("Technical Debt", metrics.technical_debt.clone()),
            ("Lines of Code", metrics.lines_of_code.clone()),
            (
                "New Code Issues",
                format!(
                    "{} bugs, {} vulnerabilities, {} code smells",
                    metrics.new_code.bugs, metrics.new_code.vulnerabilities, metrics.new_code.code_smells
                ),
            ),
        ];
        for (name, value) in rows {
            writeln!(self.writer, "| {name} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trend(&mut self, trend: &DebtTrend) -> anyhow::Result<()> {
        writeln!(self.writer, "## Technical Debt Trend")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Current debt: {}",
            minutes_to_readable(trend.latest_minutes.max(0.0) as u64)
        )?;
        writeln!(self.writer, "- Velocity: {}", signed_minutes(trend.velocity))?;
        writeln!(
            self.writer,
            "- Direction: {} {:?}",
            trend.direction.arrow(),
            trend.direction
        )?;
        writeln!(self.writer, "- Snapshots: {}", trend.snapshots)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_dora(&mut self, dora: &DoraClassification) -> anyhow::Result<()> {
        writeln!(self.writer, "## DORA Metrics")?;
        writeln!(self.writer)?;
        self.write_table_header(&["Metric", "Value", "Level"])?;
        writeln!(
            self.writer,
            "| Deployment Frequency | {} deployments | {} |",
            dora.deployments, dora.deployment_frequency
        )?;
        writeln!(
            self.writer,
            "| Lead Time | {} | {} |",
            format_lead_time(dora.lead_time_minutes),
            dora.lead_time
        )?;
        writeln!(
            self.writer,
            "| Change Failure Rate | {} | {} |",
            format_coverage(dora.failure_rate_percent),
            dora.change_failure_rate
        )?;
        writeln!(
            self.writer,
            "| Time to Restore | - | {} |",
            dora.time_to_restore
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// `"+40m"`, `"-2h 30m"`, `"0m"`.
pub(crate) fn signed_minutes(minutes: f64) -> String {
    let magnitude = minutes_to_readable(minutes.abs().round() as u64);
    if minutes >= 0.5 {
        format!("+{magnitude}")
    } else if minutes <= -0.5 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}
