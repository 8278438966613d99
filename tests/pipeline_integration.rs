//! End-to-end tests for the series preparation pipeline
//!
//! Drives prepare_series over real temp files, including compressed input,
//! and checks ordering, fallback behavior and determinism.

use methyltrack::core::{
    prepare_series, read_records, ColumnLayout, GenomicRegion, MethylTrackError, SmoothParams,
};
use std::io::Write;
use std::path::PathBuf;

/// Minimal 4-column layout used by the fixtures: chrom start end percent
const LAYOUT: ColumnLayout = ColumnLayout {
    value_column: 3,
    drop_leading_column: false,
};

fn write_bed(dir: &tempfile::TempDir, name: &str, rows: &[(u64, f64)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# test fixture").unwrap();
    for (start, percent) in rows {
        writeln!(file, "chr1\t{}\t{}\t{}", start, start + 1, percent).unwrap();
    }
    path
}

/// n CpG-like sites spread evenly over [lo, lo + span)
fn synth_rows(n: u64, lo: u64, span: u64) -> Vec<(u64, f64)> {
    (0..n)
        .map(|i| (lo + i * span / n, (i % 100) as f64))
        .collect()
}

#[test]
fn sparse_source_falls_back_while_dense_source_smooths() {
    let dir = tempfile::tempdir().unwrap();
    // 6 points over ~1000 bp: below window_size=20, falls back to raw
    let sparse = write_bed(&dir, "sparse.bed", &synth_rows(6, 5000, 1000));
    // 30 points: smooths to 30 - 20 + 1 = 11 points
    let dense = write_bed(&dir, "dense.bed", &synth_rows(30, 5000, 1000));

    let sources = vec![
        ("sparse".to_string(), sparse),
        ("dense".to_string(), dense),
    ];
    let region = GenomicRegion::new("chr1", 4000, 7000);
    let params = SmoothParams {
        window_size: 20,
        min_points_for_smooth: 5,
    };

    let (series, raw) = prepare_series(&sources, &region, &params, &LAYOUT).unwrap();

    assert_eq!(series[0].name, "sparse");
    assert_eq!(series[0].positions.len(), 6);
    assert_eq!(raw[0].1.len(), 6);

    assert_eq!(series[1].name, "dense");
    assert_eq!(series[1].positions.len(), 11);
    assert_eq!(raw[1].1.len(), 30);

    // Smoothed output stays inside the raw position envelope
    let first = *series[1].positions.first().unwrap();
    let last = *series[1].positions.last().unwrap();
    assert!(first >= 5000.0 && last < 6000.0);
}

#[test]
fn region_without_data_yields_named_empty_series() {
    let dir = tempfile::tempdir().unwrap();
    let bed = write_bed(&dir, "a.bed", &synth_rows(10, 5000, 1000));
    let sources = vec![("hp1".to_string(), bed)];
    let region = GenomicRegion::new("chr7", 0, 1_000_000);

    let (series, raw) =
        prepare_series(&sources, &region, &SmoothParams::default(), &LAYOUT).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "hp1");
    assert!(series[0].positions.is_empty());
    assert!(series[0].values.is_empty());
    assert_eq!(raw[0].0, "hp1");
    assert!(raw[0].1.is_empty());
}

#[test]
fn build_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_bed(&dir, "a.bed", &synth_rows(40, 1000, 2000));
    let b = write_bed(&dir, "b.bed", &synth_rows(25, 1500, 1500));
    let sources = vec![("hp1".to_string(), a), ("hp2".to_string(), b)];
    let region = GenomicRegion::new("chr1", 0, 10_000);
    let params = SmoothParams {
        window_size: 10,
        min_points_for_smooth: 3,
    };

    let first = prepare_series(&sources, &region, &params, &LAYOUT).unwrap();
    for _ in 0..5 {
        let again = prepare_series(&sources, &region, &params, &LAYOUT).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn failing_source_aborts_and_is_named() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_bed(&dir, "good.bed", &synth_rows(10, 1000, 500));
    let bad = dir.path().join("bad.bed");
    std::fs::write(&bad, "chr1\t100\t101\t12.5\nchr1\t200\tbroken\t50.0\n").unwrap();

    let sources = vec![("ok".to_string(), good), ("broken_hp".to_string(), bad)];
    let region = GenomicRegion::new("chr1", 0, 10_000);

    let result = prepare_series(&sources, &region, &SmoothParams::default(), &LAYOUT);
    match result {
        Err(MethylTrackError::Source { name, .. }) => assert_eq!(name, "broken_hp"),
        other => panic!("expected fail-fast Source error, got {:?}", other),
    }
}

#[test]
fn gzipped_and_plain_sources_parse_identically() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = tempfile::tempdir().unwrap();
    let rows = synth_rows(20, 3000, 1000);
    let plain = write_bed(&dir, "plain.bed", &rows);

    let gz_path = dir.path().join("same.bed.gz");
    let mut encoder = GzEncoder::new(
        std::fs::File::create(&gz_path).unwrap(),
        Compression::default(),
    );
    encoder
        .write_all(&std::fs::read(&plain).unwrap())
        .unwrap();
    encoder.finish().unwrap();

    let from_plain = read_records(&plain, &LAYOUT).unwrap();
    let from_gz = read_records(&gz_path, &LAYOUT).unwrap();
    assert_eq!(from_plain, from_gz);
    assert_eq!(from_plain.len(), 20);
}

#[test]
fn modkit_and_pb_presets_read_their_columns() {
    let dir = tempfile::tempdir().unwrap();

    let ont = dir.path().join("ont.bed");
    std::fs::write(
        &ont,
        "chr1\t100\t101\tm\t42\t+\t100\t101\t255,0,0\t42\t87.5\t30\t12\t0\t0\t2\t0\t0\n",
    )
    .unwrap();
    let pb = dir.path().join("pb.bed");
    std::fs::write(&pb, "chr1\t100\t101\t12\tH1\t20\t15\t5\t62.5\n").unwrap();

    let ont_records = read_records(&ont, &ColumnLayout::modkit()).unwrap();
    let pb_records = read_records(&pb, &ColumnLayout::pb_cpg()).unwrap();
    assert_eq!(ont_records[0].percent_modified, 87.5);
    assert_eq!(pb_records[0].percent_modified, 62.5);
}
