//! Terminal styling and display formatting for metric values.

mod values;

pub use values::{
    format_coverage, format_lead_time, format_number, minutes_to_days, minutes_to_readable,
};

use crate::core::{Grade, Rating};
use crate::dora::PerformanceLevel;
use crate::gate::{ConditionStatus, Verdict};
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            config.color = ColorMode::Never;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
}

pub struct ColoredFormatter {
    color: bool,
    emoji: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self {
            color,
            emoji: config.emoji.should_use_emoji(),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.emoji {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }
}

pub fn style_verdict(f: &dyn OutputFormatter, verdict: Verdict) -> String {
    let label = verdict.label().to_uppercase();
    match verdict {
        Verdict::Critical => format!("{} {}", f.emoji("🚨", "[CRITICAL]"), f.error(&label)),
        Verdict::Failed => format!("{} {}", f.emoji("✗", "[FAIL]"), f.error(&label)),
        Verdict::Warning => format!("{} {}", f.emoji("⚠", "[WARN]"), f.warning(&label)),
        Verdict::Passed => format!("{} {}", f.emoji("✓", "[OK]"), f.success(&label)),
    }
}

pub fn style_condition(f: &dyn OutputFormatter, status: ConditionStatus) -> String {
    let label = status.label();
    match status {
        ConditionStatus::Passed => f.success(label),
        ConditionStatus::Warning => f.warning(label),
        ConditionStatus::Failed => f.error(label),
        ConditionStatus::Unknown => f.dim(label),
    }
}

/// A and B read as healthy, C as borderline, D and E as failing.
pub fn style_rating(f: &dyn OutputFormatter, rating: &Rating) -> String {
    let text = rating.to_string();
    match rating.grade() {
        Some(Grade::A) => f.success(&text),
        Some(Grade::B | Grade::C) => f.warning(&text),
        Some(Grade::D | Grade::E) => f.error(&text),
        None => f.dim(&text),
    }
}

pub fn style_performance(f: &dyn OutputFormatter, level: PerformanceLevel) -> String {
    match level {
        PerformanceLevel::Elite | PerformanceLevel::High => f.success(level.label()),
        PerformanceLevel::Medium => f.warning(level.label()),
        PerformanceLevel::Low => f.error(level.label()),
        PerformanceLevel::Unknown => f.dim(level.label()),
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
