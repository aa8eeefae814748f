pub mod output;
pub mod snapshots;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use snapshots::{
    load_dora_metrics, load_history, load_latest_snapshot, parse_snapshots, select_latest,
};

use crate::errors::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read a whole input document from a file, or from stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| Error::io_at(e, path))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io_at(e, path))
}
