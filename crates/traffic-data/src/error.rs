//! Error types for the traffic-data crate.
//!
//! This module defines semantic error enums for record generation and the
//! output file, following the project's error handling conventions with
//! `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while generating traffic records.
///
/// Generation itself cannot fail for sane parameters; these variants cover
/// values supplied through configuration that cannot describe a window or a
/// jitter radius.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The lookback window is negative, NaN, or infinite.
    #[error("lookback window must be a finite, non-negative number of days, got {days_back}")]
    InvalidLookback {
        /// Rejected lookback value in days.
        days_back: f64,
    },

    /// The coordinate variance is negative, NaN, or infinite.
    #[error("coordinate variance must be a finite, non-negative number of degrees, got {variance}")]
    InvalidVariance {
        /// Rejected variance in degrees.
        variance: f64,
    },

    /// Subtracting the lookback offset left the representable date range.
    #[error("lookback of {hours_back} hours falls outside the representable date range")]
    TimestampOutOfRange {
        /// Offset that could not be applied.
        hours_back: f64,
    },
}

/// Errors that can occur when reading or writing the traffic output file.
///
/// Every variant names the path involved so the process boundary can report
/// a useful message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output path is not valid UTF-8 or does not name a file.
    #[error("invalid output path '{path}': {message}")]
    InvalidPath {
        /// Path as supplied, lossily converted for display.
        path: String,
        /// Why the path was rejected.
        message: String,
    },

    /// The output directory could not be created or opened.
    #[error("failed to create output directory '{path}': {message}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write traffic file at '{path}': {message}")]
    Write {
        /// File that could not be written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The traffic file could not be read.
    #[error("failed to read traffic file at '{path}': {message}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The records could not be serialized to JSON.
    #[error("failed to serialize traffic records: {message}")]
    Serialize {
        /// Description of the serialization error.
        message: String,
    },

    /// The traffic file is not a valid JSON array of records.
    #[error("invalid traffic JSON in '{path}': {message}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Description of the parse error.
        message: String,
    },
}
