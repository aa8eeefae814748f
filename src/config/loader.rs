use std::fs;
use std::path::{Path, PathBuf};

use super::core::QualityLensConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".qualitylens.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<QualityLensConfig, String> {
    let mut config = toml::from_str::<QualityLensConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.sanitize();
    Ok(config)
}

/// Try loading config from a specific path, logging and skipping on failure
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<QualityLensConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.qualitylens.toml`
pub fn discover_config(start: PathBuf) -> QualityLensConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            QualityLensConfig::default()
        })
}

/// Discover configuration starting from the current directory
pub fn load_config() -> QualityLensConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            QualityLensConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// malformed file here is an error.
pub fn load_config_from(path: &Path) -> Result<QualityLensConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io_at(e, path))?;
    parse_and_validate_config(&contents).map_err(Error::configuration)
}
