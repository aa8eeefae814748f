use crate::io::output::{no_data_message, OutputWriter};
use crate::report::QualityReport;
use serde::Serialize;
use serde_json;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NoData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project_key: Option<&'a str>,
    status: &'static str,
    message: String,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &QualityReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_no_data(&mut self, project: Option<&str>) -> anyhow::Result<()> {
        self.write_value(&NoData {
            project_key: project,
            status: "no_data",
            message: no_data_message(project),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grade, MetricsSnapshot};
    use crate::report::RadarReport;

    fn render(f: impl FnOnce(&mut JsonWriter<&mut Vec<u8>>) -> anyhow::Result<()>) -> serde_json::Value {
        let mut buffer = Vec::new();
        f(&mut JsonWriter::new(&mut buffer)).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_report_sections_are_omitted_when_absent() {
        let snapshot = MetricsSnapshot::with_ratings(Grade::A, Grade::A, Grade::A);
        let report = QualityReport::new(None).with_radar(RadarReport::from_snapshot(&snapshot));
        let json = render(|w| w.write_report(&report));
        assert!(json.get("gate").is_none());
        assert_eq!(json["radar"]["composite"]["score"], 70);
        assert_eq!(json["radar"]["composite"]["band"], "B");
    }

    #[test]
    fn test_no_data_document() {
        let json = render(|w| w.write_no_data(Some("api")));
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["projectKey"], "api");
    }
}
