//! Roster analytics.
//!
//! - [`aggregate`]: grouped counts ranked by count, then key
//! - [`trend`]: least-squares line over ranked counts, extrapolated forward
//! - [`synthetic`]: demonstration series generated once per process
//! - [`context`]: the read-only state every query runs against

pub mod aggregate;
pub mod context;
pub mod synthetic;
pub mod trend;

pub use aggregate::{distinct_count, group_count, group_counts, presence, rank_groups};
pub use context::AnalyticsContext;
pub use synthetic::{generate_default, generate_synthetic};
pub use trend::{LinearFit, MAX_HORIZON, TrendOptions, predict_trend};
