//! Error types and utilities for pointdiff

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pointdiff operations
pub type Result<T> = std::result::Result<T, PointDiffError>;

/// Main error type for pointdiff operations
#[derive(Error, Debug)]
pub enum PointDiffError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A named input file could not be opened or read
    #[error("Cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed tabular input that is not tied to a particular column
    #[error("Data error: {message}")]
    Data {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Missing or mistyped column in the input table
    #[error("Schema error: {message}")]
    Schema {
        message: String,
        column: Option<String>,
        line: Option<u64>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl PointDiffError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a file that could not be read
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a schema error for a missing or mistyped column
    pub fn schema_column(msg: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            column: Some(column.into()),
            line: None,
        }
    }

    /// Create a schema error for a row that failed to decode
    pub fn schema_line(msg: impl Into<String>, line: u64) -> Self {
        Self::Schema {
            message: msg.into(),
            column: None,
            line: Some(line),
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to PointDiffError
impl From<csv::Error> for PointDiffError {
    fn from(err: csv::Error) -> Self {
        if let Some(line) = err.position().map(csv::Position::line) {
            match err.kind() {
                csv::ErrorKind::Deserialize { err: de, .. } => {
                    return Self::schema_line(format!("row at line {line}: {de}"), line);
                }
                csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                    return Self::schema_line(
                        format!("row at line {line} has {len} fields, expected {expected_len}"),
                        line,
                    );
                }
                _ => {}
            }
        }

        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            kind => Self::data(format!("CSV decoding failed: {kind:?}")),
        }
    }
}

/// Convert from toml::de::Error to PointDiffError
impl From<toml::de::Error> for PointDiffError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PointDiffError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PointDiffError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
