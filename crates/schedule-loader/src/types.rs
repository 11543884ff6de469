//! Loader-specific types for schedule export processing.

use thiserror::Error;

/// Number of fields in one data line of a schedule export.
pub const SCHEDULE_FIELD_COUNT: usize = 25;

/// Errors that can occur while loading a schedule export.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// I/O error reading the export.
    #[error("IO error reading schedule export: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A quoted field was opened but never closed.
    #[error("invalid record at line {line}, position {position}")]
    UnterminatedQuote {
        /// Line number in the source (the header is line 1).
        line: usize,
        /// Byte offset where the unterminated field starts.
        position: usize,
    },

    /// The line did not split into the expected number of fields.
    #[error("invalid record at line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// Line number in the source.
        line: usize,
        /// Expected field count.
        expected: usize,
        /// Found field count.
        found: usize,
    },

    /// The line is not valid UTF-8.
    #[error("invalid record at line {line}: not valid UTF-8")]
    InvalidEncoding {
        /// Line number in the source.
        line: usize,
    },

    /// A numeric column did not hold a non-negative integer.
    #[error("invalid record at line {line}: column {column} is not an integer: {value:?}")]
    InvalidInteger {
        /// Line number in the source.
        line: usize,
        /// Zero-based column index.
        column: usize,
        /// The invalid value.
        value: String,
    },
}

impl ScheduleError {
    /// Returns true if this error describes a single bad data line.
    ///
    /// Such errors are reported and the line is skipped; every other error
    /// means the source itself could not be read.
    pub fn is_malformed_line(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedQuote { .. }
                | Self::FieldCount { .. }
                | Self::InvalidEncoding { .. }
                | Self::InvalidInteger { .. }
        )
    }

    /// Returns the source line number for malformed-line errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnterminatedQuote { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidEncoding { line }
            | Self::InvalidInteger { line, .. } => Some(*line),
            Self::Io(_) | Self::FileNotFound { .. } => None,
        }
    }
}

/// Result type for schedule loading operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Configuration for loading a schedule export.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Whether the first line is a header to be discarded.
    pub has_header: bool,
    /// Number of fields a data line must split into.
    pub expected_fields: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            expected_fields: SCHEDULE_FIELD_COUNT,
        }
    }
}

/// Outcome of loading a schedule export.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Data lines read (header excluded).
    pub lines_read: usize,
    /// Items inserted into the store.
    pub loaded: usize,
    /// Inserts that replaced an item with the same key.
    pub replaced: usize,
    /// Malformed lines that were skipped.
    pub errors: Vec<ScheduleError>,
    /// Time taken to load in milliseconds.
    pub parse_time_ms: u64,
}

impl LoadReport {
    /// Returns the number of skipped lines.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns the percentage of data lines that loaded successfully.
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.loaded as f64 / self.lines_read as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = LoadConfig::default();
        assert!(config.has_header);
        assert_eq!(config.expected_fields, 25);
    }

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::UnterminatedQuote {
            line: 7,
            position: 31,
        };
        assert_eq!(err.to_string(), "invalid record at line 7, position 31");

        let err = ScheduleError::FieldCount {
            line: 3,
            expected: 25,
            found: 24,
        };
        assert!(err.to_string().starts_with("invalid record"));
    }

    #[test]
    fn test_malformed_line_classification() {
        let malformed = ScheduleError::InvalidInteger {
            line: 2,
            column: 6,
            value: "three".to_string(),
        };
        assert!(malformed.is_malformed_line());
        assert_eq!(malformed.line(), Some(2));

        let encoding = ScheduleError::InvalidEncoding { line: 5 };
        assert!(encoding.is_malformed_line());
        assert_eq!(encoding.line(), Some(5));

        let missing = ScheduleError::FileNotFound {
            path: "schedule.csv".to_string(),
        };
        assert!(!missing.is_malformed_line());
        assert_eq!(missing.line(), None);
    }

    #[test]
    fn test_load_report_success_rate() {
        let report = LoadReport {
            lines_read: 4,
            loaded: 3,
            ..Default::default()
        };
        assert!((report.success_rate() - 75.0).abs() < 0.01);
        assert_eq!(report.error_count(), 0);

        assert_eq!(LoadReport::default().success_rate(), 0.0);
    }
}
