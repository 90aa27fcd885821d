//! Whole-table summary counts.

use serde::{Deserialize, Serialize};

/// Present (non-null) and missing (null) value counts for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceCount {
    pub present: usize,
    pub missing: usize,
}

/// Headline counts for the loaded roster.
///
/// Counts for unresolved roles are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total_records: usize,
    pub unique_cities: usize,
    pub unique_states: usize,
    pub unique_names: usize,
    pub phones_present: usize,
    pub phones_missing: usize,
    pub emails_present: usize,
    pub emails_missing: usize,
    pub websites_present: usize,
    pub websites_missing: usize,
}
