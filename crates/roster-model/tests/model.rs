//! Tests for roster-model types.

use roster_model::{
    GroupCount, LabeledSeries, PhotographyTypeCount, PredictionPoint, RankedSeries,
    ResolvedSchema, Role, RosterSummary, TrendForecast,
};

#[test]
fn labeled_series_uses_column_name_as_key_field() {
    let series = RankedSeries::from_ranked(vec![GroupCount::new("LA", 3), GroupCount::new("SF", 1)]);
    let labeled = LabeledSeries::new("City", series);
    let json = serde_json::to_value(&labeled).expect("serialize series");
    assert_eq!(
        json,
        serde_json::json!([
            {"City": "LA", "count": 3},
            {"City": "SF", "count": 1}
        ])
    );
}

#[test]
fn empty_forecast_serializes_empty_lists() {
    let forecast = TrendForecast::empty("city");
    let json = serde_json::to_value(&forecast).expect("serialize forecast");
    assert_eq!(json, serde_json::json!({"history": [], "predictions": []}));
}

#[test]
fn prediction_points_keep_fractional_values() {
    let point = PredictionPoint {
        future_index: 10,
        predicted: -0.25,
    };
    let json = serde_json::to_value(point).expect("serialize point");
    assert_eq!(json, serde_json::json!({"future_index": 10, "predicted": -0.25}));
}

#[test]
fn photography_type_serializes_type_field() {
    let entry = PhotographyTypeCount {
        kind: "Wedding".to_string(),
        count: 120,
    };
    let json = serde_json::to_value(&entry).expect("serialize type count");
    assert_eq!(json, serde_json::json!({"type": "Wedding", "count": 120}));
}

#[test]
fn summary_round_trips() {
    let summary = RosterSummary {
        total_records: 4,
        unique_cities: 2,
        phones_present: 3,
        phones_missing: 1,
        ..RosterSummary::default()
    };
    let json = serde_json::to_string(&summary).expect("serialize summary");
    let round: RosterSummary = serde_json::from_str(&json).expect("deserialize summary");
    assert_eq!(round, summary);
}

#[test]
fn schema_iterates_every_role() {
    let mut schema = ResolvedSchema::new();
    schema.assign(Role::State, "State");
    let roles: Vec<(Role, Option<&str>)> = schema.iter().collect();
    assert_eq!(roles.len(), Role::ALL.len());
    assert!(roles.contains(&(Role::State, Some("State"))));
    assert!(roles.contains(&(Role::City, None)));
}
