//! Property-based tests for BED-like record parsing

use methyltrack::core::{parse_records, ColumnLayout, RecordParseError};
use proptest::prelude::*;

/// Generate a valid chromosome name
fn arb_chrom_name() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u8..=22).prop_map(|n| format!("chr{}", n)),
        Just("chrX".to_string()),
        Just("chrY".to_string()),
    ]
}

/// Generate a percent value with one decimal place
fn arb_percent() -> impl Strategy<Value = f64> {
    (0u32..=1000).prop_map(|n| n as f64 / 10.0)
}

/// Generate one modkit-style pileup row: chrom start end code score strand
/// start end color valid_cov percent ...
fn arb_modkit_row() -> impl Strategy<Value = (String, u64, u64, f64, String)> {
    (arb_chrom_name(), 1000u64..10_000_000, 1u64..100, arb_percent()).prop_map(
        |(chrom, start, size, percent)| {
            let end = start + size;
            let row = format!(
                "{}\t{}\t{}\tm\t42\t+\t{}\t{}\t255,0,0\t42\t{}\t30\t12\t0\t0\t2\t0\t0",
                chrom, start, end, start, end, percent
            );
            (chrom, start, end, percent, row)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every well-formed modkit row parses to the exact normalized record
    #[test]
    fn prop_modkit_row_round_trip(rows in prop::collection::vec(arb_modkit_row(), 1..30)) {
        let text: String = rows.iter().map(|r| format!("{}\n", r.4)).collect();
        let records = parse_records(text.as_bytes(), &ColumnLayout::modkit()).unwrap();

        prop_assert_eq!(records.len(), rows.len());
        for (record, (chrom, start, end, percent, _)) in records.iter().zip(rows.iter()) {
            prop_assert_eq!(&record.chrom, chrom);
            prop_assert_eq!(record.start, *start);
            prop_assert_eq!(record.end, *end);
            prop_assert!((record.percent_modified - percent).abs() < 1e-9);
        }
    }

    /// Comments and headers never contribute records
    #[test]
    fn prop_comments_are_skipped(rows in prop::collection::vec(arb_modkit_row(), 1..10)) {
        let mut text = String::from("# generated by modkit pileup\ntrack name=meth\n");
        for row in &rows {
            text.push_str(&row.4);
            text.push('\n');
        }
        let records = parse_records(text.as_bytes(), &ColumnLayout::modkit()).unwrap();
        prop_assert_eq!(records.len(), rows.len());
    }

    /// One malformed row anywhere aborts the whole parse (strict policy),
    /// and the error carries that row's line number
    #[test]
    fn prop_malformed_row_aborts(
        rows in prop::collection::vec(arb_modkit_row(), 1..10),
        bad_index in 0usize..10,
    ) {
        let bad_index = bad_index % rows.len();
        let mut lines: Vec<String> = rows.iter().map(|r| r.4.clone()).collect();
        lines[bad_index] = "chr1\tnot_a_number\t200\tm".to_string();
        let text = lines.join("\n");

        let result = parse_records(text.as_bytes(), &ColumnLayout::modkit());
        match result {
            Err(RecordParseError::TooFewFields { line, .. })
            | Err(RecordParseError::InvalidNumber { line, .. }) => {
                prop_assert_eq!(line, bad_index + 1);
            }
            other => prop_assert!(false, "expected abort, got {:?}", other),
        }
    }

    /// The value column is addressed in raw (pre-drop) field numbering
    #[test]
    fn prop_value_column_independent_of_drop(
        chrom in arb_chrom_name(),
        start in 0u64..1_000_000,
        percent in arb_percent(),
    ) {
        let dropped = format!("read_1\t{}\t{}\t{}\t{}", chrom, start, start + 1, percent);
        let plain = format!("{}\t{}\t{}\t{}", chrom, start, start + 1, percent);

        let with_drop = ColumnLayout { value_column: 4, drop_leading_column: true };
        let without_drop = ColumnLayout { value_column: 3, drop_leading_column: false };

        let a = parse_records(dropped.as_bytes(), &with_drop).unwrap();
        let b = parse_records(plain.as_bytes(), &without_drop).unwrap();
        prop_assert_eq!(a, b);
    }
}
