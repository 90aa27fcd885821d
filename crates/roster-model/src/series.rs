//! Grouped counts, ranked series, and trend forecasts.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

/// Maximum number of entries kept in a ranked series.
pub const TOP_GROUP_LIMIT: usize = 15;

/// Number of records whose grouping column equals `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

impl GroupCount {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Count-descending list of groups, ties broken by ascending key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedSeries {
    entries: Vec<GroupCount>,
}

impl RankedSeries {
    /// Wraps entries that are already in ranked order.
    pub fn from_ranked(entries: Vec<GroupCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GroupCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the first `limit` entries.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }

    /// Sum of all counts in the series.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn into_entries(self) -> Vec<GroupCount> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankedSeries {
    type Item = &'a GroupCount;
    type IntoIter = std::slice::Iter<'a, GroupCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A ranked series whose key field is named for the column it groups.
///
/// Serializes as a list of `{<key_field>: key, "count": n}` objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSeries {
    pub key_field: String,
    pub series: RankedSeries,
}

impl LabeledSeries {
    pub fn new(key_field: impl Into<String>, series: RankedSeries) -> Self {
        Self {
            key_field: key_field.into(),
            series,
        }
    }

    /// An empty series, used when the grouping column is unresolved.
    pub fn empty(key_field: impl Into<String>) -> Self {
        Self::new(key_field, RankedSeries::default())
    }
}

impl Serialize for LabeledSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.series.len()))?;
        for entry in &self.series {
            seq.serialize_element(&LabeledEntry {
                key_field: &self.key_field,
                entry,
            })?;
        }
        seq.end()
    }
}

struct LabeledEntry<'a> {
    key_field: &'a str,
    entry: &'a GroupCount,
}

impl Serialize for LabeledEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.key_field, &self.entry.key)?;
        map.serialize_entry("count", &self.entry.count)?;
        map.end()
    }
}

/// One extrapolated point of a trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub future_index: usize,
    pub predicted: f64,
}

/// History used for a fit plus the points extrapolated from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendForecast {
    pub history: LabeledSeries,
    pub predictions: Vec<PredictionPoint>,
}

impl TrendForecast {
    pub fn empty(key_field: impl Into<String>) -> Self {
        Self {
            history: LabeledSeries::empty(key_field),
            predictions: Vec::new(),
        }
    }
}
