//! BED-like methylation record parsing
//!
//! Parses modkit / pb-CpG-tools style BED output into normalized
//! [`IntervalRecord`]s. Only the chromosome, coordinates and the configured
//! percent column are extracted; everything else in a row is ignored.
//!
//! Parsing is strict per row: the first malformed row aborts the whole load
//! with a line-numbered error. This mirrors what downstream plotting needs,
//! where a silently skipped row would shift the track without warning.

use memchr::memchr;
use std::io::BufRead;
use std::path::Path;

use crate::core::error::{RecordParseError, RecordResult};
use crate::core::io::open_reader;

/// One measured genomic interval and its methylation percentage
///
/// Invariant: `start <= end`, enforced at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRecord {
    /// Chromosome name
    pub chrom: String,
    /// Start position (0-based)
    pub start: u64,
    /// End position
    pub end: u64,
    /// Percent of modified calls at this interval (0-100)
    pub percent_modified: f64,
}

/// Column layout of a BED-like source
///
/// `value_column` is counted in the raw row's field numbering, before any
/// leading column is dropped. The chromosome/start/end columns are the first
/// three fields after the optional drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// 0-based index of the percent-modified column in the raw row
    pub value_column: usize,
    /// Drop the first column before locating chrom/start/end
    pub drop_leading_column: bool,
}

impl ColumnLayout {
    /// Layout for ONT modkit pileup BED output (percent in column 10)
    pub fn modkit() -> Self {
        Self {
            value_column: 10,
            drop_leading_column: false,
        }
    }

    /// Layout for PacBio pb-CpG-tools BED output (percent in column 8)
    pub fn pb_cpg() -> Self {
        Self {
            value_column: 8,
            drop_leading_column: false,
        }
    }

    /// Minimum number of raw fields a row must have under this layout
    fn required_fields(&self) -> usize {
        let coord_end = if self.drop_leading_column { 3 } else { 2 };
        coord_end.max(self.value_column) + 1
    }
}

/// Zero-copy view over one tab-delimited row
///
/// Field boundaries are located with memchr up front; field content is
/// decoded lazily on access.
struct RowView<'a> {
    line: &'a [u8],
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> RowView<'a> {
    fn split(line: &'a [u8]) -> Self {
        let mut field_bounds = Vec::with_capacity(12);
        let mut start_pos = 0;
        let mut pos = 0;

        while pos < line.len() {
            if let Some(tab_pos) = memchr(b'\t', &line[pos..]) {
                let end_pos = pos + tab_pos;
                field_bounds.push((start_pos, end_pos));
                start_pos = end_pos + 1;
                pos = start_pos;
            } else {
                // Last field
                field_bounds.push((start_pos, line.len()));
                break;
            }
        }

        Self { line, field_bounds }
    }

    fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    fn field(&self, index: usize, name: &'static str, line_no: usize) -> RecordResult<&'a str> {
        let (start, end) = self.field_bounds[index];
        std::str::from_utf8(&self.line[start..end]).map_err(|_| RecordParseError::InvalidUtf8 {
            line: line_no,
            field: name,
        })
    }

    fn int_field(&self, index: usize, name: &'static str, line_no: usize) -> RecordResult<u64> {
        let text = self.field(index, name, line_no)?;
        text.parse().map_err(|_| RecordParseError::InvalidNumber {
            line: line_no,
            field: name,
            value: text.to_string(),
        })
    }

    fn float_field(&self, index: usize, name: &'static str, line_no: usize) -> RecordResult<f64> {
        let text = self.field(index, name, line_no)?;
        text.parse().map_err(|_| RecordParseError::InvalidNumber {
            line: line_no,
            field: name,
            value: text.to_string(),
        })
    }
}

/// Parse one data row into an [`IntervalRecord`]
fn parse_row(line: &[u8], layout: &ColumnLayout, line_no: usize) -> RecordResult<IntervalRecord> {
    let view = RowView::split(line);

    let required = layout.required_fields();
    if view.field_count() < required {
        return Err(RecordParseError::TooFewFields {
            line: line_no,
            expected: required,
            found: view.field_count(),
        });
    }

    let base = if layout.drop_leading_column { 1 } else { 0 };
    let chrom = view.field(base, "chrom", line_no)?.to_string();
    let start = view.int_field(base + 1, "start", line_no)?;
    let end = view.int_field(base + 2, "end", line_no)?;
    let percent_modified = view.float_field(layout.value_column, "percent", line_no)?;

    if start > end {
        return Err(RecordParseError::InvalidCoordinates {
            line: line_no,
            start,
            end,
        });
    }

    Ok(IntervalRecord {
        chrom,
        start,
        end,
        percent_modified,
    })
}

/// Check whether a line is a comment or header to be skipped
fn is_skippable(line: &str) -> bool {
    line.is_empty()
        || line.starts_with('#')
        || line.starts_with("track")
        || line.starts_with("browser")
}

/// Parse all records from a buffered reader
///
/// Blank lines, `#` comments and `track`/`browser` headers are skipped.
/// Any malformed data row aborts the parse.
pub fn parse_records<R: BufRead>(
    mut reader: R,
    layout: &ColumnLayout,
) -> RecordResult<Vec<IntervalRecord>> {
    let mut records = Vec::new();
    let mut line_buf = String::with_capacity(4096);
    let mut line_no = 0;

    loop {
        line_buf.clear();
        let bytes_read = reader.read_line(&mut line_buf)?;
        if bytes_read == 0 {
            break;
        }
        line_no += 1;

        let line = line_buf.trim_end();
        if is_skippable(line) {
            continue;
        }

        records.push(parse_row(line.as_bytes(), layout, line_no)?);
    }

    Ok(records)
}

/// Parse all records from a file path
///
/// Handles plain, gzip and bzip2 compressed input transparently.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    layout: &ColumnLayout,
) -> RecordResult<Vec<IntervalRecord>> {
    let reader = open_reader(path.as_ref())?;
    parse_records(reader, layout)
}
