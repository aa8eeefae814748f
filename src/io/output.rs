use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::errors::Error;
use crate::formatting::FormattingConfig;
use crate::report::QualityReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name as written in the config file.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" | "text" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &QualityReport) -> anyhow::Result<()>;

    /// Rendered instead of a report when the input held no usable snapshot.
    fn write_no_data(&mut self, project: Option<&str>) -> anyhow::Result<()>;
}

pub(crate) fn no_data_message(project: Option<&str>) -> String {
    match project {
        Some(key) => format!("No data available for project {}.", key),
        None => "No data available.".to_string(),
    }
}

/// File sink that is created on first write. A command that fails before
/// producing any output leaves an existing file untouched.
struct DeferredFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl DeferredFile {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            file: None,
        }
    }

    fn open(&mut self) -> std::io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                let file = File::create(&self.path).map_err(|e| {
                    std::io::Error::new(e.kind(), Error::io_at(e, &self.path))
                })?;
                log::debug!("Writing output to {}", self.path.display());
                BufWriter::new(file)
            }
        };
        Ok(self.file.insert(file))
    }
}

impl Write for DeferredFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.open()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Writer for `format`, sending output to `destination` or stdout.
///
/// The destination file is only created once there is output for it.
/// Terminal output written to a file is always plain.
pub fn create_writer(
    format: OutputFormat,
    destination: Option<&Path>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    let sink: Box<dyn Write> = match destination {
        Some(path) => Box::new(DeferredFile::new(path)),
        None => Box::new(std::io::stdout()),
    };

    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => {
            let formatting = if destination.is_some() {
                FormattingConfig::plain()
            } else {
                formatting
            };
            Box::new(TerminalWriter::new(sink, formatting))
        }
    }
}
