//! Error types for speedup-report

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the positional command-line input
#[derive(Error, Debug)]
pub enum ArgumentError {
    /// Fewer positional arguments than step names plus timings
    #[error("missing arguments: expected {expected} (step names followed by timings), got {got}")]
    MissingArguments {
        /// Number of arguments the report needs
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// A timing argument that is not a floating-point number
    #[error("malformed timing at position {position}: {value:?} is not a number")]
    InvalidTiming {
        /// 1-based position among all positional arguments
        position: usize,
        /// The raw argument
        value: String,
        /// Underlying parse failure
        #[source]
        source: ParseFloatError,
    },
}

/// Report configuration problems
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height of zero
    #[error("invalid canvas size: {0}")]
    InvalidCanvas(String),

    /// Empty output directory
    #[error("invalid output directory: {0}")]
    InvalidOutputDir(String),
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum ReportError {
    /// Bad command-line input
    #[error("argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// Output directory or file could not be written
    #[error("IO error: {path}: {source}")]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed while producing the image
    #[error("render error: {0}")]
    Render(String),

    /// Invalid report configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ReportError {
    /// Wrap an IO failure with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_message() {
        let err = ReportError::from(ArgumentError::MissingArguments {
            expected: 15,
            got: 4,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("argument error"));
        assert!(msg.contains("expected 15"));
        assert!(msg.contains("got 4"));
    }

    #[test]
    fn test_invalid_timing_message() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = ArgumentError::InvalidTiming {
            position: 7,
            value: "abc".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "malformed timing at position 7: \"abc\" is not a number"
        );
    }

    #[test]
    fn test_io_message_names_path() {
        let err = ReportError::io(
            "docs/images",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("IO error"));
        assert!(msg.contains("docs/images"));
    }
}
