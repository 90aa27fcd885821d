//! Data model for roster analytics.
//!
//! Types shared between the loader, the column resolver, the aggregation
//! engine, and the query surface. Everything here is plain data and
//! serializes to the response shapes served to dashboard clients.

pub mod error;
pub mod role;
pub mod series;
pub mod summary;
pub mod synthetic;

pub use error::{Result, RosterError};
pub use role::{ResolvedSchema, Role};
pub use series::{
    GroupCount, LabeledSeries, PredictionPoint, RankedSeries, TOP_GROUP_LIMIT, TrendForecast,
};
pub use summary::{PresenceCount, RosterSummary};
pub use synthetic::{
    EquipmentShare, PhotographyTypeCount, RevenueTrend, SatisfactionScore, SyntheticMetrics,
};
