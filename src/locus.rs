//! Locus and annotation string parsing
//!
//! Parses the `chr:start-end` / `chr:start-end:name` locus strings and the
//! `name,position` vertical-line spec accepted on the command line. The core
//! pipeline never sees these strings; it only consumes the structured
//! regions produced here.

use crate::core::{GenomicRegion, LocusParseError};

/// A gene locus: its region plus an optional display name
#[derive(Debug, Clone, PartialEq)]
pub struct GeneLocus {
    pub region: GenomicRegion,
    pub name: Option<String>,
}

impl GeneLocus {
    /// Widen the locus by `pad` bp on both sides, saturating at zero
    ///
    /// Used for the default plot window when no explicit region is given.
    pub fn padded_region(&self, pad: u64) -> GenomicRegion {
        GenomicRegion::new(
            self.region.chrom.clone(),
            self.region.start.saturating_sub(pad),
            self.region.end + pad,
        )
    }
}

fn parse_coordinate(input: &str, value: &str) -> Result<u64, LocusParseError> {
    value
        .parse()
        .map_err(|_| LocusParseError::InvalidCoordinate {
            input: input.to_string(),
            value: value.to_string(),
        })
}

/// Parse `chr:start-end` or `chr:start-end:name`
pub fn parse_locus(input: &str) -> Result<GeneLocus, LocusParseError> {
    let mut parts = input.splitn(3, ':');
    let chrom = parts.next().filter(|c| !c.is_empty());
    let span = parts.next();
    let name = parts.next().filter(|n| !n.is_empty());

    let (chrom, span) = match (chrom, span) {
        (Some(c), Some(s)) => (c, s),
        _ => return Err(LocusParseError::InvalidLocus(input.to_string())),
    };

    let (start, end) = span
        .split_once('-')
        .ok_or_else(|| LocusParseError::InvalidLocus(input.to_string()))?;
    let start = parse_coordinate(input, start)?;
    let end = parse_coordinate(input, end)?;

    Ok(GeneLocus {
        region: GenomicRegion::new(chrom, start, end),
        name: name.map(str::to_string),
    })
}

/// Parse a `name,position` vertical-line spec
pub fn parse_vline(input: &str) -> Result<(String, u64), LocusParseError> {
    let (name, position) = input
        .split_once(',')
        .ok_or_else(|| LocusParseError::InvalidVline(input.to_string()))?;
    if name.is_empty() {
        return Err(LocusParseError::InvalidVline(input.to_string()));
    }
    let position = parse_coordinate(input, position.trim())?;
    Ok((name.to_string(), position))
}
