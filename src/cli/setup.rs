//! Runtime setup for the binary: logging and terminal formatting.

use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use log::LevelFilter;

/// Log level for a `-v` count: warn, info, debug, then trace.
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize `env_logger` once. `RUST_LOG`, when set, overrides the
/// verbosity flag.
pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(verbosity_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    if let Err(e) = result {
        log::debug!("Logger already initialized: {}", e);
    }
}

pub fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
