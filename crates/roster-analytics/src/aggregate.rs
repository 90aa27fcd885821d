//! Grouped counts over a single column.
//!
//! Every function here treats a missing column (`None`, or a name the
//! table does not have) as an unavailable feature and returns an empty or
//! zero result instead of an error.

use std::cmp::Ordering;

use polars::prelude::*;
use roster_ingest::{RosterTable, any_to_key};
use roster_model::{GroupCount, PresenceCount, RankedSeries, TOP_GROUP_LIMIT};
use tracing::warn;

/// Output name of the group-size aggregate.
const GROUP_SIZE: &str = "__group_size";

/// Orders groups by descending count, then ascending key.
fn rank_order(a: &GroupCount, b: &GroupCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

/// Sorts groups into ranking order.
pub fn rank_groups(mut groups: Vec<GroupCount>) -> Vec<GroupCount> {
    groups.sort_by(rank_order);
    groups
}

fn lookup<'a>(table: &'a RosterTable, column: Option<&str>) -> Option<&'a Column> {
    column.and_then(|name| table.frame().column(name).ok())
}

/// Group sizes of the non-null values in `column`, in no particular order.
fn value_counts(column: &Column) -> PolarsResult<Vec<GroupCount>> {
    let name = column.name().clone();
    let counts = DataFrame::new(vec![column.clone()])?
        .lazy()
        .filter(col(name.clone()).is_not_null())
        .group_by([col(name.clone())])
        .agg([len().alias(GROUP_SIZE)])
        .collect()?;

    let keys = counts.column(name.as_str())?.as_materialized_series();
    let sizes = counts
        .column(GROUP_SIZE)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;
    let mut groups = Vec::with_capacity(counts.height());
    for (idx, size) in sizes.u64()?.into_iter().enumerate() {
        if let (Some(key), Some(size)) = (any_to_key(keys.get(idx)?), size) {
            groups.push(GroupCount::new(key, size as usize));
        }
    }
    Ok(groups)
}

/// Full ranking of non-null values in `column`, untruncated.
///
/// Counts sum to the number of non-null cells.
pub fn group_counts(table: &RosterTable, column: Option<&str>) -> Vec<GroupCount> {
    let Some(column) = lookup(table, column) else {
        return Vec::new();
    };
    match value_counts(column) {
        Ok(groups) => rank_groups(groups),
        Err(error) => {
            warn!(column = %column.name(), %error, "grouping failed; returning no groups");
            Vec::new()
        }
    }
}

/// Ranking of `column` truncated to [`TOP_GROUP_LIMIT`] entries.
pub fn group_count(table: &RosterTable, column: Option<&str>) -> RankedSeries {
    RankedSeries::from_ranked(group_counts(table, column)).truncated(TOP_GROUP_LIMIT)
}

/// Number of distinct non-null values in `column`.
pub fn distinct_count(table: &RosterTable, column: Option<&str>) -> usize {
    let Some(column) = lookup(table, column) else {
        return 0;
    };
    match column.as_materialized_series().drop_nulls().n_unique() {
        Ok(count) => count,
        Err(error) => {
            warn!(column = %column.name(), %error, "distinct count failed");
            0
        }
    }
}

/// Non-null and null cell counts for `column`.
pub fn presence(table: &RosterTable, column: Option<&str>) -> PresenceCount {
    let Some(missing) = column.and_then(|name| table.null_count(name)) else {
        return PresenceCount::default();
    };
    PresenceCount {
        present: table.height().saturating_sub(missing),
        missing,
    }
}
