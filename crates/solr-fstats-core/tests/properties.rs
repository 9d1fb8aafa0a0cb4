//! Property tests for percentages, ordering and the CSV header.

mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use solr_fstats_core::{
    COLUMNS, FieldStatistic, FieldStrategy, OutputFormat, Percentage, StatsOptions, run,
    write_report,
};

use common::{StubSolr, client};

fn has_two_decimals(text: &str) -> bool {
    match text.split_once('.') {
        Some((whole, fraction)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && fraction.len() == 2
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

proptest! {
    #[test]
    fn percentage_always_has_two_decimals(total in 0u64..1_000_000, part_seed in 0u64..1_000_000) {
        let part = if total == 0 { 0 } else { part_seed % (total + 1) };
        let text = Percentage::of(part, total).to_string();
        prop_assert!(has_two_decimals(&text), "{text}");
        let value: f64 = text.parse().unwrap();
        prop_assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn statistic_counts_sum_to_total(total in 0u64..1_000_000, part_seed in 0u64..1_000_000) {
        let existing = if total == 0 { 0 } else { part_seed % (total + 1) };
        let stat = FieldStatistic::new("f", existing, total - existing, total);
        prop_assert_eq!(stat.counted(), total);
        let record = stat.to_record();
        prop_assert_eq!(record.len(), COLUMNS.len());
    }

    #[test]
    fn fields_sorted_and_unique(
        schema in proptest::collection::vec("[a-z_]{1,8}", 1..6),
        observed in proptest::collection::vec("[a-z_]{1,8}", 1..6),
    ) {
        let schema_refs: Vec<&str> = schema.iter().map(String::as_str).collect();
        let expected: BTreeSet<String> = schema.iter().chain(&observed).cloned().collect();

        let mut stub = StubSolr::new()
            .schema(&schema_refs)
            .observed(&observed.join(","))
            .total(5);
        for name in &expected {
            stub = stub.field(name, 2, 3);
        }

        let options = StatsOptions { strategy: FieldStrategy::SchemaAndObserved };
        let stats = run(&client(&stub), &options).unwrap();
        let names: Vec<String> = stats.iter().map(|s| s.field_name.clone()).collect();
        prop_assert_eq!(names, expected.into_iter().collect::<Vec<_>>());

        let mut out = Vec::new();
        write_report(&mut out, &stats, OutputFormat::Csv).unwrap();
        let output = String::from_utf8(out).unwrap();
        let header = output.lines().next().unwrap();
        prop_assert_eq!(
            header,
            r#""field_name","existing","existing_percentage","notexisting","notexisting_percentage""#
        );
    }
}
