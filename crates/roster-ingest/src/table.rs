//! The in-memory roster table.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::csv::normalize_header;
use crate::error::{IngestError, Result};
use crate::value::any_to_key;

/// Read-only roster: ordered records with named, nullable columns.
///
/// Created once by the loader; there is no API to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct RosterTable {
    frame: DataFrame,
}

impl RosterTable {
    /// Wraps a frame, trimming header whitespace.
    ///
    /// A header that is blank after trimming is named `column_<position>`
    /// (1-based), as exports with an unnamed index column produce.
    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        let trimmed: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| normalize_header(name))
            .collect();

        let mut seen: BTreeSet<String> = trimmed
            .iter()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        let mut names = Vec::with_capacity(trimmed.len());
        let mut given = BTreeSet::new();
        for (index, name) in trimmed.into_iter().enumerate() {
            if name.is_empty() {
                let generated = positional_name(index, &seen);
                seen.insert(generated.clone());
                names.push(generated);
                continue;
            }
            if !given.insert(name.clone()) {
                return Err(IngestError::DuplicateColumn { column: name });
            }
            names.push(name);
        }

        frame.set_column_names(names.iter().map(String::as_str))?;
        Ok(Self { frame })
    }

    /// Number of records.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.frame.column(column).is_ok()
    }

    /// Cell text for a column, `None` entries for nulls.
    ///
    /// Returns `None` when the column does not exist.
    pub fn cells(&self, column: &str) -> Option<Vec<Option<String>>> {
        let col = self.frame.column(column).ok()?;
        Some(column_text(col))
    }

    /// Number of null cells in a column, `None` when the column does not exist.
    pub fn null_count(&self, column: &str) -> Option<usize> {
        let col = self.frame.column(column).ok()?;
        Some(col.null_count())
    }

    /// The underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }
}

fn positional_name(index: usize, taken: &BTreeSet<String>) -> String {
    let base = format!("column_{}", index + 1);
    let mut candidate = base.clone();
    let mut suffix = 1;
    while taken.contains(&candidate) {
        candidate = format!("{base}_{suffix}");
        suffix += 1;
    }
    candidate
}

fn column_text(col: &Column) -> Vec<Option<String>> {
    let series = col.as_materialized_series();
    if let Ok(chunked) = series.str() {
        return chunked
            .iter()
            .map(|value| value.map(str::to_string))
            .collect();
    }
    (0..col.len())
        .map(|idx| col.get(idx).ok().and_then(any_to_key))
        .collect()
}
