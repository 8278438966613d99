//! MethylTrack - methylation percentage tracks from BED files
//!
//! Prepares and renders per-sample DNA methylation tracks over a genomic
//! window, for comparing haplotypes, samples or platforms at a locus.
//!
//! # Pipeline
//!
//! For each named source: parse BED-like records, keep those fully contained
//! in the queried region, then smooth with a count-based windowed moving
//! average. Sources are processed in parallel with rayon; output order
//! always matches input order.
//!
//! # Example
//!
//! ```ignore
//! use methyltrack::{prepare_series, ColumnLayout, GenomicRegion, SmoothParams};
//!
//! let sources = vec![("HP1".to_string(), "hp1.bed".into())];
//! let region = GenomicRegion::new("chr15", 80143050, 80198076);
//!
//! let (series, raw) = prepare_series(
//!     &sources,
//!     &region,
//!     &SmoothParams::default(),
//!     &ColumnLayout::modkit(),
//! )?;
//! ```

pub mod core;
pub mod locus;
pub mod plot;

// Re-export commonly used types
pub use crate::core::{
    filter_region, parse_records, prepare_series, read_records, sliding_mean, ColumnLayout,
    GenomicRegion, IntervalRecord, LocusParseError, MethylTrackError, PlotError,
    RecordParseError, Result, Series, SmoothParams,
};
pub use crate::locus::{parse_locus, parse_vline, GeneLocus};
pub use crate::plot::{render_series, LineAnnotation, PlotConfig, SpanAnnotation};
