//! Demonstration metric series.
//!
//! The series have fixed shapes and randomly drawn values. The random
//! source and the reference date are parameters so a seeded generator
//! reproduces the same output; production callers use
//! [`generate_default`], which is unseeded.

use std::ops::RangeInclusive;

use chrono::{Local, NaiveDate, TimeDelta};
use rand::Rng;
use roster_model::{
    EquipmentShare, PhotographyTypeCount, RevenueTrend, SatisfactionScore, SyntheticMetrics,
};
use tracing::debug;

/// Number of monthly revenue points.
pub const REVENUE_MONTHS: usize = 12;

/// Spacing between revenue points, in days.
const REVENUE_STEP_DAYS: i64 = 30;

const REVENUE_RANGE: RangeInclusive<u32> = 8_000..=20_000;

const EQUIPMENT_SHARES: [(&str, RangeInclusive<u32>); 5] = [
    ("Canon", 30..=45),
    ("Nikon", 25..=40),
    ("Sony", 15..=30),
    ("Fujifilm", 5..=15),
    ("Other", 5..=10),
];

const PHOTOGRAPHY_TYPES: [(&str, RangeInclusive<u32>); 5] = [
    ("Portrait", 100..=200),
    ("Wedding", 80..=150),
    ("Landscape", 70..=130),
    ("Commercial", 60..=120),
    ("Event", 90..=160),
];

const SATISFACTION_SCORES: [(&str, RangeInclusive<u32>); 12] = [
    ("Jan", 80..=95),
    ("Feb", 82..=94),
    ("Mar", 85..=96),
    ("Apr", 83..=97),
    ("May", 87..=98),
    ("Jun", 88..=97),
    ("Jul", 86..=96),
    ("Aug", 84..=95),
    ("Sep", 85..=96),
    ("Oct", 87..=97),
    ("Nov", 89..=98),
    ("Dec", 90..=99),
];

/// Generates all four series from `rng`, with revenue months counted back
/// from `today`.
pub fn generate_synthetic<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> SyntheticMetrics {
    let metrics = SyntheticMetrics {
        revenue_trend: revenue_trend(rng, today),
        equipment_distribution: EQUIPMENT_SHARES
            .iter()
            .map(|(category, range)| EquipmentShare {
                category: (*category).to_string(),
                value: rng.random_range(range.clone()),
            })
            .collect(),
        photography_types: PHOTOGRAPHY_TYPES
            .iter()
            .map(|(kind, range)| PhotographyTypeCount {
                kind: (*kind).to_string(),
                count: rng.random_range(range.clone()),
            })
            .collect(),
        satisfaction_trend: SATISFACTION_SCORES
            .iter()
            .map(|(month, range)| SatisfactionScore {
                month: (*month).to_string(),
                score: rng.random_range(range.clone()),
            })
            .collect(),
    };
    debug!(%today, "generated synthetic metrics");
    metrics
}

/// Generates the series from the thread-local RNG and the local date.
pub fn generate_default() -> SyntheticMetrics {
    generate_synthetic(&mut rand::rng(), Local::now().date_naive())
}

/// Dates the revenue points are labeled with, most recent first.
pub fn revenue_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..REVENUE_MONTHS as i64)
        .map(|i| today - TimeDelta::days(REVENUE_STEP_DAYS * i))
        .collect()
}

fn revenue_trend<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> RevenueTrend {
    let mut trend = RevenueTrend::default();
    for date in revenue_dates(today) {
        trend.months.push(date.format("%b %Y").to_string());
        trend.revenue.push(rng.random_range(REVENUE_RANGE));
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn same_seed_same_series() {
        let first = generate_synthetic(&mut StdRng::seed_from_u64(7), fixed_day());
        let second = generate_synthetic(&mut StdRng::seed_from_u64(7), fixed_day());
        assert_eq!(first, second);
    }

    #[test]
    fn revenue_labels_run_backwards_from_today() {
        let metrics = generate_synthetic(&mut StdRng::seed_from_u64(1), fixed_day());
        let months = &metrics.revenue_trend.months;
        assert_eq!(months.len(), REVENUE_MONTHS);
        assert_eq!(months[0], "Oct 2026");
        assert_eq!(months[1], "Sep 2026");
        assert_eq!(months[9], "Jan 2026");
        assert_eq!(months[10], "Dec 2025");
        assert_eq!(months[11], "Nov 2025");

        let dates = revenue_dates(fixed_day());
        assert!(dates.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn values_fall_inside_their_ranges() {
        let metrics = generate_synthetic(&mut StdRng::seed_from_u64(99), fixed_day());
        assert!(
            metrics
                .revenue_trend
                .revenue
                .iter()
                .all(|value| REVENUE_RANGE.contains(value))
        );
        let equipment = metrics.equipment_distribution.iter().zip(&EQUIPMENT_SHARES);
        for (share, (category, range)) in equipment {
            assert_eq!(share.category, *category);
            assert!(range.contains(&share.value));
        }
        for (entry, (kind, range)) in metrics.photography_types.iter().zip(&PHOTOGRAPHY_TYPES) {
            assert_eq!(entry.kind, *kind);
            assert!(range.contains(&entry.count));
        }
        let months: Vec<&str> = metrics
            .satisfaction_trend
            .iter()
            .map(|s| s.month.as_str())
            .collect();
        assert_eq!(
            months,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ]
        );
        for (entry, (_, range)) in metrics.satisfaction_trend.iter().zip(&SATISFACTION_SCORES) {
            assert!(range.contains(&entry.score));
        }
    }
}
