//! Errors for the I/O edges of the analyzer
//!
//! The scoring path itself never fails; only reading input, parsing weight
//! files and writing reports can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by input/output around the engine
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is empty: {0}")]
    EmptyInput(PathBuf),

    #[error("Invalid weight for '{name}': {value} (must be finite and >= 0)")]
    InvalidWeight { name: String, value: f64 },
}

impl AnalyzerError {
    /// Wrap an io::Error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_weight() {
        let err = AnalyzerError::InvalidWeight {
            name: "entropy".to_string(),
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid weight for 'entropy': -1 (must be finite and >= 0)"
        );
    }

    #[test]
    fn test_display_io_includes_path() {
        let err = AnalyzerError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AnalyzerError = parse.unwrap_err().into();
        assert!(matches!(err, AnalyzerError::Json(_)));
    }
}
