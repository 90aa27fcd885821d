use anyhow::{Context, Result};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, trace};

use roster_analytics::{AnalyticsContext, generate_default, generate_synthetic};
use roster_cli::config::{QueryOverrides, QuerySettings, RosterConfig};
use roster_cli::logging::redact_value;
use roster_cli::render::{
    Report, equipment_table, photography_types_table, predictions_table, revenue_table,
    satisfaction_table, schema_table, series_table, summary_table, to_json,
};
use roster_ingest::read_roster_table;
use roster_model::LabeledSeries;

use crate::cli::{Cli, Command, MockSeriesArg, OutputFormatArg, TrendArgs};

/// Loads the roster once, then answers the requested query on stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.query.config {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::default(),
    };
    let trend_args = match &cli.command {
        Command::Predictions(args) | Command::Report(args) => *args,
        _ => TrendArgs::default(),
    };
    let overrides = QueryOverrides {
        dataset: cli.query.data.clone(),
        top_n: trend_args.top_n,
        horizon: trend_args.horizon,
        seed: cli.query.seed,
    };
    let settings = QuerySettings::resolve(overrides, config)?;
    let context = build_context(&settings)?;

    let span = info_span!("query", command = command_name(&cli.command));
    let _guard = span.enter();
    let output = answer(&cli.command, &context, &settings, cli.query.format)?;
    println!("{output}");
    Ok(())
}

fn build_context(settings: &QuerySettings) -> Result<AnalyticsContext> {
    let table = {
        let span = info_span!("load", path = %settings.dataset.display());
        let _guard = span.enter();
        read_roster_table(&settings.dataset)
            .with_context(|| format!("load roster {}", settings.dataset.display()))?
    };
    let synthetic = match settings.seed {
        Some(seed) => {
            info!(seed, "seeded demonstration series");
            generate_synthetic(&mut StdRng::seed_from_u64(seed), Local::now().date_naive())
        }
        None => generate_default(),
    };
    Ok(AnalyticsContext::initialize(table, synthetic))
}

fn answer(
    command: &Command,
    context: &AnalyticsContext,
    settings: &QuerySettings,
    format: OutputFormatArg,
) -> Result<String> {
    let json = format == OutputFormatArg::Json;
    let text = match command {
        Command::Summary => {
            let summary = context.summary();
            if json {
                to_json(&summary)?
            } else {
                summary_table(&summary).to_string()
            }
        }
        Command::TopCities => ranked(&context.top_cities(), json)?,
        Command::TopStates => ranked(&context.top_states(), json)?,
        Command::Top { role } => ranked(&context.top_for_role(*role), json)?,
        Command::Geo => ranked(&context.geographic_distribution(), json)?,
        Command::Predictions(_) => {
            let forecast = context.predictions(&settings.trend);
            if json {
                to_json(&forecast)?
            } else {
                format!(
                    "{}\n{}",
                    series_table(&forecast.history),
                    predictions_table(&forecast)
                )
            }
        }
        Command::Mock { series } => mock(context, *series, json)?,
        Command::Columns => {
            if json {
                to_json(context.schema())?
            } else {
                schema_table(context.schema()).to_string()
            }
        }
        Command::Report(_) => {
            let report = Report {
                summary: context.summary(),
                top_cities: context.top_cities(),
                top_states: context.top_states(),
                predictions: context.predictions(&settings.trend),
                geographic_distribution: context.geographic_distribution(),
                mock: context.synthetic(),
            };
            if json {
                to_json(&report)?
            } else {
                report_text(&report)
            }
        }
    };
    Ok(text)
}

fn ranked(series: &LabeledSeries, json: bool) -> Result<String> {
    if let Some(first) = series.series.iter().next() {
        trace!(
            key_field = %series.key_field,
            key = redact_value(&first.key),
            count = first.count,
            "leading group"
        );
    }
    if json {
        Ok(to_json(series)?)
    } else {
        Ok(series_table(series).to_string())
    }
}

fn mock(context: &AnalyticsContext, series: MockSeriesArg, json: bool) -> Result<String> {
    let text = match (series, json) {
        (MockSeriesArg::Revenue, true) => to_json(context.revenue_trend())?,
        (MockSeriesArg::Revenue, false) => revenue_table(context.revenue_trend()).to_string(),
        (MockSeriesArg::Equipment, true) => to_json(context.equipment_distribution())?,
        (MockSeriesArg::Equipment, false) => {
            equipment_table(context.equipment_distribution()).to_string()
        }
        (MockSeriesArg::PhotographyTypes, true) => to_json(context.photography_types())?,
        (MockSeriesArg::PhotographyTypes, false) => {
            photography_types_table(context.photography_types()).to_string()
        }
        (MockSeriesArg::Satisfaction, true) => to_json(context.satisfaction_trend())?,
        (MockSeriesArg::Satisfaction, false) => {
            satisfaction_table(context.satisfaction_trend()).to_string()
        }
    };
    Ok(text)
}

fn report_text(report: &Report<'_>) -> String {
    let sections = [
        ("Summary", summary_table(&report.summary)),
        ("Top cities", series_table(&report.top_cities)),
        ("Top states", series_table(&report.top_states)),
        ("City trend", predictions_table(&report.predictions)),
        ("Geographic distribution", series_table(&report.geographic_distribution)),
        ("Revenue", revenue_table(&report.mock.revenue_trend)),
        ("Equipment", equipment_table(&report.mock.equipment_distribution)),
        ("Photography types", photography_types_table(&report.mock.photography_types)),
        ("Satisfaction", satisfaction_table(&report.mock.satisfaction_trend)),
    ];
    sections
        .iter()
        .map(|(title, table)| format!("{title}\n{table}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Summary => "summary",
        Command::TopCities => "top-cities",
        Command::TopStates => "top-states",
        Command::Top { .. } => "top",
        Command::Predictions(_) => "predictions",
        Command::Geo => "geo",
        Command::Mock { .. } => "mock",
        Command::Columns => "columns",
        Command::Report(_) => "report",
    }
}
