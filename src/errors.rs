//! Shared error types for qualitylens.
//!
//! The evaluation core (rating conversion, gate evaluation, dimension
//! scoring) is total and never fails. Errors only arise at the edges:
//! reading inputs, parsing JSON documents, and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qualitylens operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A metrics document that is not valid JSON or has the wrong shape
    #[error("Invalid metrics input{}: {message}", display_path(.path))]
    InvalidInput {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("cannot access {}", path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create an invalid input error, optionally tied to the file it came from
    pub fn invalid_input(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            path,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether the user can fix this by correcting an input or config file
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Configuration(_) | Self::Json(_)
        )
    }
}

/// Result type alias for qualitylens operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_includes_path() {
        let err = Error::invalid_input("expected an object", Some(PathBuf::from("latest.json")));
        assert_eq!(
            err.to_string(),
            "Invalid metrics input in latest.json: expected an object"
        );
    }

    #[test]
    fn test_invalid_input_display_without_path() {
        let err = Error::invalid_input("expected an object", None);
        assert_eq!(err.to_string(), "Invalid metrics input: expected an object");
    }

    #[test]
    fn test_user_fixable_classification() {
        assert!(Error::configuration("bad weight").is_user_fixable());
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::io_at(denied, "/tmp/x").is_user_fixable());
    }

    #[test]
    fn test_io_at_names_path_once_and_keeps_source() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::io_at(missing, "/data/in.json");
        assert_eq!(err.to_string(), "File system error: cannot access /data/in.json");

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("no such file"));

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain.matches("no such file").count(), 1);
    }
}
