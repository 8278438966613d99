//! Genomic regions and region filtering

use crate::core::record::IntervalRecord;

/// A query window on one chromosome
///
/// The core accepts any structurally valid region, including a degenerate
/// one with `start > end`; filtering such a region simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicRegion {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl GenomicRegion {
    pub fn new(chrom: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
        }
    }

    /// Check whether a record lies fully inside this region
    ///
    /// Fully-contained semantics: a record partially overlapping the region
    /// boundary is excluded. Callers needing overlap semantics must widen
    /// the region first.
    pub fn contains(&self, record: &IntervalRecord) -> bool {
        record.chrom == self.chrom && record.start >= self.start && record.end <= self.end
    }
}

impl std::fmt::Display for GenomicRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.end)
    }
}

/// Select the records fully contained in `region`, sorted by start
///
/// The sort is stable, so records with equal starts keep their input order.
pub fn filter_region(records: &[IntervalRecord], region: &GenomicRegion) -> Vec<IntervalRecord> {
    let mut selected: Vec<IntervalRecord> = records
        .iter()
        .filter(|r| region.contains(r))
        .cloned()
        .collect();
    selected.sort_by_key(|r| r.start);
    selected
}
