//! Per-invocation state shared by the evaluating commands.
//!
//! The selected project and the loaded configuration travel with the
//! command as an explicit value; nothing is stored globally.

use crate::cli::CommonArgs;
use crate::config::{load_config, load_config_from, QualityLensConfig};
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::io::output::{create_writer, OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project: Option<String>,
    pub config: QualityLensConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(QualityLensConfig::default())
    }
}

impl CommandContext {
    /// Context with defaults from `config` and no command-line overrides.
    pub fn new(config: QualityLensConfig) -> Self {
        Self::resolve(&CommonArgs::default(), config, FormattingConfig::from_env())
    }

    /// Load configuration and resolve the options given on the command line.
    pub fn from_args(args: &CommonArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => load_config(),
        };
        let formatting = crate::cli::create_formatting_config(args.plain);
        Ok(Self::resolve(args, config, formatting))
    }

    /// Command-line values win over configured defaults.
    fn resolve(args: &CommonArgs, config: QualityLensConfig, formatting: FormattingConfig) -> Self {
        let project = args
            .project
            .clone()
            .or_else(|| config.default_project().map(str::to_string));

        let format = args
            .format
            .map(OutputFormat::from)
            .or_else(|| configured_format(&config))
            .unwrap_or(OutputFormat::Terminal);

        let formatting = if config.plain_output() {
            FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
        } else {
            formatting
        };

        Self {
            project,
            config,
            format,
            output: args.output.clone(),
            formatting,
        }
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn writer(&self) -> Box<dyn OutputWriter> {
        create_writer(self.format, self.output.as_deref(), self.formatting)
    }
}

fn configured_format(config: &QualityLensConfig) -> Option<OutputFormat> {
    let name = config.default_format()?;
    let format = OutputFormat::parse(name);
    if format.is_none() {
        log::warn!("Unknown default_format {:?} in config. Using terminal.", name);
    }
    format
}
