//! Property checks for grouping and trend invariants.

use polars::prelude::*;
use proptest::prelude::*;
use roster_analytics::{TrendOptions, group_count, group_counts, predict_trend};
use roster_ingest::RosterTable;
use roster_model::TOP_GROUP_LIMIT;

fn table_from(values: &[Option<String>]) -> RosterTable {
    let df = df! { "City" => values }.expect("build table");
    RosterTable::from_frame(df).expect("wrap table")
}

fn city_values() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of("[A-F]{1,2}"), 0..60)
}

proptest! {
    #[test]
    fn full_grouping_sums_to_non_null_count(values in city_values()) {
        let table = table_from(&values);
        let total: usize = group_counts(&table, Some("City")).iter().map(|g| g.count).sum();
        let non_null = values.iter().filter(|v| v.is_some()).count();
        prop_assert_eq!(total, non_null);
    }

    #[test]
    fn ranked_series_is_bounded_and_ordered(values in city_values()) {
        let table = table_from(&values);
        let series = group_count(&table, Some("City"));
        prop_assert!(series.len() <= TOP_GROUP_LIMIT);
        for pair in series.entries().windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(pair[0].key < pair[1].key);
            }
        }
    }

    #[test]
    fn prediction_count_follows_history_length(values in city_values(), horizon in 0usize..8) {
        let table = table_from(&values);
        let options = TrendOptions { top_n: 10, horizon };
        let forecast = predict_trend(&table, Some("City"), &options);
        let expected = if forecast.history.series.len() >= 2 { horizon } else { 0 };
        prop_assert_eq!(forecast.predictions.len(), expected);
        prop_assert!(forecast.history.series.len() <= 10);
    }
}
