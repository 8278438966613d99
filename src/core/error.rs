//! Error types for MethylTrack
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for MethylTrack operations
#[derive(Debug, Error)]
pub enum MethylTrackError {
    /// Record parsing failure attributed to a named sample
    ///
    /// `prepare_series` is fail-fast: the first source that fails to parse
    /// aborts the whole build, and the error names that source.
    #[error("Failed to load sample '{name}': {source}")]
    Source {
        name: String,
        #[source]
        source: RecordParseError,
    },

    /// Record parsing errors outside a named-source context
    #[error("Record parse error: {0}")]
    Record(#[from] RecordParseError),

    /// Locus string parsing errors
    #[error("Locus parse error: {0}")]
    Locus(#[from] LocusParseError),

    /// Chart rendering errors
    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing BED-like methylation records
///
/// Parsing is strict per row: the first malformed row aborts the whole
/// load rather than being skipped.
#[derive(Debug, Error)]
pub enum RecordParseError {
    /// Row has fewer fields than the column layout requires
    #[error("Too few fields at line {line}: expected at least {expected}, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate or value field failed to parse as a number
    #[error("Failed to parse {field} '{value}' at line {line}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Record start is greater than record end
    #[error("Invalid interval at line {line}: start ({start}) > end ({end})")]
    InvalidCoordinates { line: usize, start: u64, end: u64 },

    /// A field contains invalid UTF-8
    #[error("Invalid UTF-8 in {field} at line {line}")]
    InvalidUtf8 { line: usize, field: &'static str },

    /// Input file not found
    #[error("BED file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing locus and annotation strings
#[derive(Debug, Error)]
pub enum LocusParseError {
    /// Locus string is not of the form chr:start-end or chr:start-end:name
    #[error("Invalid locus '{0}': expected chr:start-end or chr:start-end:name")]
    InvalidLocus(String),

    /// Vertical-line spec is not of the form name,position
    #[error("Invalid line annotation '{0}': expected name,position")]
    InvalidVline(String),

    /// A coordinate in a locus string failed to parse
    #[error("Failed to parse coordinate '{value}' in '{input}'")]
    InvalidCoordinate { input: String, value: String },
}

/// Errors that can occur while rendering a chart
#[derive(Debug, Error)]
pub enum PlotError {
    /// Drawing backend failure (bitmap or SVG)
    #[error("Drawing backend error: {0}")]
    Backend(String),

    /// Output path has an unsupported extension
    #[error("Unsupported output format: {0} (use .png or .svg)")]
    UnsupportedFormat(PathBuf),
}

/// Result type alias for MethylTrack operations
pub type Result<T> = std::result::Result<T, MethylTrackError>;

/// Result type alias for record parsing operations
pub type RecordResult<T> = std::result::Result<T, RecordParseError>;
