//! Per-sample series assembly
//!
//! Orchestrates parse -> filter -> smooth for every named source sharing one
//! query region. Sources are independent, so they are processed in parallel
//! with rayon; results are collected back in input order, keeping series
//! (and therefore legend) ordering deterministic.

use rayon::prelude::*;
use std::path::PathBuf;

use crate::core::error::{MethylTrackError, Result};
use crate::core::record::{read_records, ColumnLayout, IntervalRecord};
use crate::core::region::{filter_region, GenomicRegion};
use crate::core::smooth::{sliding_mean, SmoothParams};

/// One sample's plotted track: aligned positions and values
///
/// Positions may be fractional after smoothing (window centroids). Empty
/// sequences are valid and mean the region holds no data for this sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub positions: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build one series per named source over a shared region
///
/// `named_sources` is an ordered list of (sample name, BED path) pairs; the
/// output series appear in exactly that order. A sample whose filtered set
/// is empty still gets a Series entry, with empty positions and values.
///
/// Also returns, per sample, the filtered pre-smoothing records so callers
/// can re-smooth with different parameters without re-reading the files.
///
/// Fail-fast: the first source that fails to parse aborts the whole build,
/// and the returned error names that source.
pub fn prepare_series(
    named_sources: &[(String, PathBuf)],
    region: &GenomicRegion,
    params: &SmoothParams,
    layout: &ColumnLayout,
) -> Result<(Vec<Series>, Vec<(String, Vec<IntervalRecord>)>)> {
    // par_iter over an indexed collection collects in input order, not
    // completion order, so the result is deterministic.
    let per_source: Vec<(Series, (String, Vec<IntervalRecord>))> = named_sources
        .par_iter()
        .map(|(name, path)| {
            let records = read_records(path, layout).map_err(|source| {
                MethylTrackError::Source {
                    name: name.clone(),
                    source,
                }
            })?;
            let filtered = filter_region(&records, region);
            log::debug!(
                "{}: {} records, {} inside {}",
                name,
                records.len(),
                filtered.len(),
                region
            );

            let series = if filtered.is_empty() {
                Series {
                    name: name.clone(),
                    positions: Vec::new(),
                    values: Vec::new(),
                }
            } else {
                let positions: Vec<u64> = filtered.iter().map(|r| r.start).collect();
                let values: Vec<f64> = filtered.iter().map(|r| r.percent_modified).collect();
                let (xs, ys) = sliding_mean(&positions, &values, params);
                Series {
                    name: name.clone(),
                    positions: xs,
                    values: ys,
                }
            };

            Ok((series, (name.clone(), filtered)))
        })
        .collect::<Result<_>>()?;

    Ok(per_source.into_iter().unzip())
}
