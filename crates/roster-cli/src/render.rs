//! Terminal tables and JSON documents for query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use roster_model::{
    EquipmentShare, LabeledSeries, PhotographyTypeCount, ResolvedSchema, RevenueTrend,
    RosterSummary, SatisfactionScore, SyntheticMetrics, TrendForecast,
};

/// Every query result in one document, as served by `report`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub summary: RosterSummary,
    pub top_cities: LabeledSeries,
    pub top_states: LabeledSeries,
    pub predictions: TrendForecast,
    pub geographic_distribution: LabeledSeries,
    pub mock: &'a SyntheticMetrics,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn summary_table(summary: &RosterSummary) -> Table {
    let mut table = styled_table(&["Metric", "Value"]);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Total records", summary.total_records),
        ("Unique cities", summary.unique_cities),
        ("Unique states", summary.unique_states),
        ("Unique names", summary.unique_names),
        ("Phones present", summary.phones_present),
        ("Phones missing", summary.phones_missing),
        ("Emails present", summary.emails_present),
        ("Emails missing", summary.emails_missing),
        ("Websites present", summary.websites_present),
        ("Websites missing", summary.websites_missing),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), count_cell(value)]);
    }
    table
}

/// Ranked groups with a rank column; the key header is the series' key field.
pub fn series_table(series: &LabeledSeries) -> Table {
    let mut table = styled_table(&["#", series.key_field.as_str(), "Count"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if series.series.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("(none)"), dim_cell("-")]);
        return table;
    }
    for (rank, entry) in series.series.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&entry.key),
            count_cell(entry.count),
        ]);
    }
    table
}

pub fn predictions_table(forecast: &TrendForecast) -> Table {
    let mut table = styled_table(&["Future index", "Predicted"]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    if forecast.predictions.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("(too little history)")]);
    }
    for point in &forecast.predictions {
        table.add_row(vec![
            Cell::new(point.future_index),
            Cell::new(format!("{:.2}", point.predicted)),
        ]);
    }
    table
}

pub fn schema_table(schema: &ResolvedSchema) -> Table {
    let mut table = styled_table(&["Role", "Column"]);
    for (role, column) in schema.iter() {
        let column = match column {
            Some(name) => Cell::new(name).fg(Color::Green),
            None => dim_cell("unresolved"),
        };
        table.add_row(vec![Cell::new(role.as_str()), column]);
    }
    table
}

pub fn revenue_table(trend: &RevenueTrend) -> Table {
    let mut table = styled_table(&["Month", "Revenue"]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (month, revenue) in trend.months.iter().zip(&trend.revenue) {
        table.add_row(vec![Cell::new(month), Cell::new(revenue)]);
    }
    table
}

pub fn equipment_table(shares: &[EquipmentShare]) -> Table {
    let mut table = styled_table(&["Category", "Value"]);
    align_column(&mut table, 1, CellAlignment::Right);
    for share in shares {
        table.add_row(vec![Cell::new(&share.category), Cell::new(share.value)]);
    }
    table
}

pub fn photography_types_table(types: &[PhotographyTypeCount]) -> Table {
    let mut table = styled_table(&["Type", "Count"]);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in types {
        table.add_row(vec![Cell::new(&entry.kind), Cell::new(entry.count)]);
    }
    table
}

pub fn satisfaction_table(scores: &[SatisfactionScore]) -> Table {
    let mut table = styled_table(&["Month", "Score"]);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in scores {
        table.add_row(vec![Cell::new(&entry.month), Cell::new(entry.score)]);
    }
    table
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().copied().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
