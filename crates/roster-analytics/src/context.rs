//! Read-only analytics state shared by every query.
//!
//! The table, its resolved schema, and the synthetic series are fixed when
//! the context is built. Queries take `&self` only, so one context can be
//! shared across threads behind an `Arc` without locking.

use std::sync::Arc;

use roster_ingest::RosterTable;
use roster_map::resolve_roles;
use roster_model::{
    EquipmentShare, LabeledSeries, PhotographyTypeCount, RankedSeries, ResolvedSchema,
    RevenueTrend, Role, RosterSummary, SatisfactionScore, SyntheticMetrics, TrendForecast,
};
use tracing::{debug, info, info_span};

use crate::aggregate::{distinct_count, group_count, group_counts, presence};
use crate::trend::{TrendOptions, predict_trend};

/// Key field of geographic-distribution entries.
const GEOGRAPHIC_KEY_FIELD: &str = "state";

/// Loaded roster plus everything derived from it at startup.
#[derive(Debug, Clone)]
pub struct AnalyticsContext {
    table: RosterTable,
    schema: ResolvedSchema,
    synthetic: SyntheticMetrics,
}

impl AnalyticsContext {
    /// Resolves column roles once and captures the synthetic series.
    pub fn initialize(table: RosterTable, synthetic: SyntheticMetrics) -> Self {
        let span = info_span!("resolve", columns = table.width());
        let schema = span.in_scope(|| resolve_roles(&table.column_names()));
        for (role, column) in schema.iter() {
            match column {
                Some(column) => info!(role = %role, column, "role resolved"),
                None => info!(role = %role, "role unresolved; dependent queries return empty results"),
            }
        }
        Self {
            table,
            schema,
            synthetic,
        }
    }

    /// Wraps the context for sharing between request handlers.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn table(&self) -> &RosterTable {
        &self.table
    }

    pub fn schema(&self) -> &ResolvedSchema {
        &self.schema
    }

    fn column(&self, role: Role) -> Option<&str> {
        let column = self.schema.column(role);
        if column.is_none() {
            debug!(role = %role, "query on unresolved role");
        }
        column
    }

    /// Record count, distinct counts, and contact-field coverage.
    pub fn summary(&self) -> RosterSummary {
        let phones = presence(&self.table, self.column(Role::Phone));
        let emails = presence(&self.table, self.column(Role::Email));
        let websites = presence(&self.table, self.column(Role::Website));
        RosterSummary {
            total_records: self.table.height(),
            unique_cities: distinct_count(&self.table, self.column(Role::City)),
            unique_states: distinct_count(&self.table, self.column(Role::State)),
            unique_names: distinct_count(&self.table, self.column(Role::Name)),
            phones_present: phones.present,
            phones_missing: phones.missing,
            emails_present: emails.present,
            emails_missing: emails.missing,
            websites_present: websites.present,
            websites_missing: websites.missing,
        }
    }

    /// Top groups for any role, keyed by the resolved column name.
    pub fn top_for_role(&self, role: Role) -> LabeledSeries {
        match self.column(role) {
            Some(column) => LabeledSeries::new(column, group_count(&self.table, Some(column))),
            None => LabeledSeries::empty(role.as_str()),
        }
    }

    pub fn top_cities(&self) -> LabeledSeries {
        self.top_for_role(Role::City)
    }

    pub fn top_states(&self) -> LabeledSeries {
        self.top_for_role(Role::State)
    }

    /// Trend over the top city counts.
    pub fn predictions(&self, options: &TrendOptions) -> TrendForecast {
        match self.column(Role::City) {
            Some(column) => predict_trend(&self.table, Some(column), options),
            None => TrendForecast::empty(Role::City.as_str()),
        }
    }

    /// Every state with its record count, untruncated.
    pub fn geographic_distribution(&self) -> LabeledSeries {
        let groups = group_counts(&self.table, self.column(Role::State));
        LabeledSeries::new(GEOGRAPHIC_KEY_FIELD, RankedSeries::from_ranked(groups))
    }

    pub fn synthetic(&self) -> &SyntheticMetrics {
        &self.synthetic
    }

    pub fn revenue_trend(&self) -> &RevenueTrend {
        &self.synthetic.revenue_trend
    }

    pub fn equipment_distribution(&self) -> &[EquipmentShare] {
        &self.synthetic.equipment_distribution
    }

    pub fn photography_types(&self) -> &[PhotographyTypeCount] {
        &self.synthetic.photography_types
    }

    pub fn satisfaction_trend(&self) -> &[SatisfactionScore] {
        &self.synthetic.satisfaction_trend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn context_is_shareable() {
        assert_send_sync::<AnalyticsContext>();
        assert_send_sync::<Arc<AnalyticsContext>>();
    }
}
