//! Core data-preparation pipeline
//!
//! This module contains the record parser, region filter, window smoother
//! and the per-sample series builder that ties them together.

mod error;
pub mod io;
mod record;
mod region;
mod series;
mod smooth;

pub use error::{
    LocusParseError, MethylTrackError, PlotError, RecordParseError, RecordResult, Result,
};
pub use io::{detect_compression, open_reader, CompressionFormat, DEFAULT_BUFFER_SIZE};
pub use record::{parse_records, read_records, ColumnLayout, IntervalRecord};
pub use region::{filter_region, GenomicRegion};
pub use series::{prepare_series, Series};
pub use smooth::{sliding_mean, SmoothParams};
