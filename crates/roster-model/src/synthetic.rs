//! Demonstration series for dashboards.
//!
//! These shapes are independent of the loaded roster. They are generated
//! once at startup and then served unchanged.

use serde::{Deserialize, Serialize};

/// Monthly revenue, most recent month first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueTrend {
    pub months: Vec<String>,
    pub revenue: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentShare {
    pub category: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotographyTypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfactionScore {
    pub month: String,
    pub score: u32,
}

/// The four cached demonstration series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticMetrics {
    pub revenue_trend: RevenueTrend,
    pub equipment_distribution: Vec<EquipmentShare>,
    pub photography_types: Vec<PhotographyTypeCount>,
    pub satisfaction_trend: Vec<SatisfactionScore>,
}
