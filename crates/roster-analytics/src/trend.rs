//! Linear trend over ranked counts.
//!
//! The independent variable is a group's rank position (0-based) and the
//! dependent variable its count. The fitted line is evaluated at the rank
//! positions that follow the history. Predicted values are left as real
//! numbers; they are neither rounded nor clamped at zero.

use roster_ingest::RosterTable;
use roster_model::{
    LabeledSeries, PredictionPoint, RankedSeries, TOP_GROUP_LIMIT, TrendForecast,
};

use crate::aggregate::group_count;

/// Largest number of points [`extrapolate`] produces.
pub const MAX_HORIZON: usize = 1_000;

/// How much history to fit and how far to extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendOptions {
    /// Leading ranked groups used as history (at most [`TOP_GROUP_LIMIT`]).
    pub top_n: usize,
    /// Number of points to extrapolate.
    pub horizon: usize,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            horizon: 5,
        }
    }
}

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fits a line through `points`.
    ///
    /// Returns `None` with fewer than two points or when every `x` is the
    /// same, since the slope is undefined in both cases.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in points {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }
        if sxx == 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Extrapolates `horizon` points past the end of `history`, at most
/// [`MAX_HORIZON`].
///
/// Empty when the history has fewer than two entries.
pub fn extrapolate(history: &RankedSeries, horizon: usize) -> Vec<PredictionPoint> {
    let points: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(rank, group)| (rank as f64, group.count as f64))
        .collect();
    let Some(line) = LinearFit::fit(&points) else {
        return Vec::new();
    };
    let start = history.len();
    let end = start.saturating_add(horizon.min(MAX_HORIZON));
    (start..end)
        .map(|future_index| PredictionPoint {
            future_index,
            predicted: line.evaluate(future_index as f64),
        })
        .collect()
}

/// Key field used for history entries when no column is resolved.
const UNRESOLVED_KEY_FIELD: &str = "key";

/// Ranks `column`, keeps the top `options.top_n` groups as history, and
/// extrapolates `options.horizon` points from them.
///
/// History entries are keyed by the column's own name.
pub fn predict_trend(
    table: &RosterTable,
    column: Option<&str>,
    options: &TrendOptions,
) -> TrendForecast {
    let history = group_count(table, column).truncated(options.top_n.min(TOP_GROUP_LIMIT));
    let predictions = extrapolate(&history, options.horizon);
    TrendForecast {
        history: LabeledSeries::new(column.unwrap_or(UNRESOLVED_KEY_FIELD), history),
        predictions,
    }
}
