//! Timecard Analyzer Library
//!
//! A Rust library for auditing employee timecard exports and flagging
//! attendance patterns that need a second look.
//!
//! This library provides tools for:
//! - Loading timecard CSV exports into a uniform record shape
//! - Normalizing timestamps written in inconsistent textual formats
//! - Detecting employees who worked a run of consecutive calendar days
//! - Detecting short shifts and shifts that exceed a maximum duration
//! - Rendering findings as a human-readable report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod attendance_analyzer;
        pub mod datetime_normalizer;
        pub mod report_formatter;
        pub mod timecard_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnalysisReport, AnalyzerKind, Finding, Summary, TimecardRecord};
pub use config::Config;

/// Result type alias for the timecard analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for timecard loading and analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// CSV reader error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Structural problem with the input: no header row, required column absent
    #[error("Invalid timecard data in '{file}': {message}")]
    DataFormat { file: String, message: String },

    /// Timestamp matched none of the accepted formats
    #[error("Cannot parse date-time '{value}': {message}")]
    TimestampParsing { value: String, message: String },

    /// Reported hours value is not a number or a clock-style duration
    #[error("Cannot parse hours '{value}': {message}")]
    HoursParsing { value: String, message: String },

    /// Row lacks a field it needs
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a structural data error
    pub fn data_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a timestamp parsing error
    pub fn timestamp_parsing(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TimestampParsing {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an hours parsing error
    pub fn hours_parsing(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HoursParsing {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for errors that mean the input source itself is unusable
    pub fn is_fatal_data_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::FileNotFound { .. }
                | Self::CsvParsing { .. }
                | Self::DataFormat { .. }
        )
    }

    /// True for value-level parse failures subject to the parse error policy
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::TimestampParsing { .. } | Self::HoursParsing { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
