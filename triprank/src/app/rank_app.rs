use super::cli_args::{App, CliArgs, OutputFormat};
use super::AppSettings;
use crate::model::context::ScoringContext;
use crate::model::emissions::{EmissionModel, EmissionRates};
use crate::model::metrics::{ingest_ops, RouteMetrics};
use crate::model::ranking::{ranking_ops, RankingCriterion, RankingRow, Rgb};
use crate::model::rates::{RateTable, RateTableConfig, TripFrequency};
use crate::model::route::RouteOption;
use crate::model::ScoringError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;

pub fn run(args: &CliArgs) -> Result<(), ScoringError> {
    match &args.app {
        App::Rank {
            options_filename,
            rates_filename,
            emissions_filename,
            settings_filename,
            primary,
            secondary,
            round_trip,
            yearly,
            format,
        } => {
            let settings = match settings_filename {
                Some(filename) => AppSettings::from_file(filename)?,
                None => AppSettings::default(),
            };
            let ctx = build_context(&settings, rates_filename, emissions_filename)?;
            let options: Vec<RouteOption> = load_json(options_filename)?;
            log::info!("scoring {} trip options", options.len());

            let metrics = ingest_ops::prepare(options, &ctx);
            let frequency = TripFrequency {
                one_way: !round_trip,
                daily: !yearly,
            };
            let rows = ranking_ops::rank_options(&metrics, &ctx, *primary, *secondary, &frequency);

            match format {
                OutputFormat::Table => print_table(&metrics, &rows, *primary, *secondary),
                OutputFormat::Csv => write_csv(std::io::stdout(), &metrics, &rows)?,
            }
            Ok(())
        }
    }
}

/// assembles the scoring context from defaults, optional asset files, and
/// user settings, in that order.
fn build_context(
    settings: &AppSettings,
    rates_filename: &Option<String>,
    emissions_filename: &Option<String>,
) -> Result<ScoringContext, ScoringError> {
    let mut rates = match rates_filename {
        Some(filename) => RateTable::from(&load_json::<RateTableConfig>(filename)?),
        None => RateTable::default(),
    };
    if let Some(rate_settings) = &settings.rates {
        rates.apply_settings(rate_settings);
    }

    let emission_rates = match emissions_filename {
        Some(filename) => load_json::<EmissionRates>(filename)?,
        None => EmissionRates::default(),
    };

    Ok(ScoringContext {
        rates,
        emissions: EmissionModel::new(emission_rates, settings.fuel_type),
        profile: settings.profile,
        plan_window: settings.plan_window,
    })
}

fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T, ScoringError> {
    let contents = std::fs::read_to_string(filename)
        .map_err(|e| ScoringError::AssetReadError(filename.to_string(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| ScoringError::AssetFormatError(filename.to_string(), e))
}

fn print_table(
    metrics: &[RouteMetrics],
    rows: &[RankingRow],
    primary: RankingCriterion,
    secondary: RankingCriterion,
) {
    println!("ranked by {} (primary) and {} (secondary)", primary, secondary);
    println!(
        "{:<4} {:<18} {:>10} {:>10} {:>10} {:>10} {:>8}",
        "#", "option", "time", "cost", "calories", "co2 g", "rank"
    );
    for (position, row) in rows.iter().enumerate() {
        let m = &metrics[row.index];
        println!(
            "{:<4} {:<18} {:>10.0} {:>10.2} {:>10.0} {:>10.1} {:>8.2}",
            position + 1,
            m.mode_descriptor(),
            row.time,
            row.cost,
            row.calories,
            row.emissions,
            row.rank
        );
    }
}

/// one line of CSV output per option, in rank order.
#[derive(Debug, Serialize)]
struct RankedRecord {
    id: Option<String>,
    option: String,
    time: f64,
    cost: f64,
    walk_distance: f64,
    calories: f64,
    weight_lost: f64,
    productive_time: f64,
    time_savings: f64,
    emissions_co2: f64,
    emissions_nox: f64,
    emissions_pm10: f64,
    primary_rank: f64,
    primary_color: Rgb,
    secondary_rank: f64,
    secondary_color: Rgb,
    rank: f64,
}

fn write_csv<W: Write>(
    writer: W,
    metrics: &[RouteMetrics],
    rows: &[RankingRow],
) -> Result<(), ScoringError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        let m = &metrics[row.index];
        csv_writer.serialize(RankedRecord {
            id: m.option.id.clone(),
            option: m.mode_descriptor(),
            time: row.time,
            cost: row.cost,
            walk_distance: row.walk_distance,
            calories: row.calories,
            weight_lost: row.weight_lost,
            productive_time: row.productive_time,
            time_savings: row.time_savings,
            emissions_co2: row.emissions,
            emissions_nox: row.emissions_nox,
            emissions_pm10: row.emissions_pm10,
            primary_rank: row.primary_rank,
            primary_color: row.primary_color,
            secondary_rank: row.secondary_rank,
            secondary_color: row.secondary_color,
            rank: row.rank,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_options_json() -> &'static str {
        r#"[
            {
                "id": "drive",
                "modes": ["car"],
                "access": [{ "mode": "CAR", "time": 1800 }],
                "time": 1800,
                "cost": 5.0,
                "driveDistance": 12000
            },
            {
                "id": "bus",
                "modes": ["walk", "bus"],
                "access": [{ "mode": "WALK", "time": 420 }],
                "transit": [{
                    "routes": [{ "mode": "BUS", "agencyName": "metro" }],
                    "rideStats": { "avg": 1200 },
                    "waitStats": { "avg": 240 }
                }],
                "time": 2400,
                "cost": 2.0,
                "walkDistance": 700,
                "calories": 80
            }
        ]"#
    }

    #[test]
    fn test_end_to_end_rank_from_json() {
        let options: Vec<RouteOption> =
            serde_json::from_str(mock_options_json()).expect("options should deserialize");
        let ctx = ScoringContext::default();
        let metrics = ingest_ops::prepare(options, &ctx);
        let rows = ranking_ops::rank_options(
            &metrics,
            &ctx,
            RankingCriterion::TotalCost,
            RankingCriterion::TravelTime,
            &TripFrequency::default(),
        );
        // the cheaper bus option wins under a cost-first ranking
        assert_eq!(metrics[rows[0].index].option.id.as_deref(), Some("bus"));
        assert_eq!(metrics[rows[1].index].option.id.as_deref(), Some("drive"));
    }

    #[test]
    fn test_csv_output_in_rank_order() {
        let options: Vec<RouteOption> =
            serde_json::from_str(mock_options_json()).expect("options should deserialize");
        let ctx = ScoringContext::default();
        let metrics = ingest_ops::prepare(options, &ctx);
        let rows = ranking_ops::rank_options(
            &metrics,
            &ctx,
            RankingCriterion::TotalCost,
            RankingCriterion::TravelTime,
            &TripFrequency::default(),
        );

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &metrics, &rows).expect("csv output should succeed");
        let output = String::from_utf8(buffer).expect("csv output is utf-8");

        let mut lines = output.lines();
        let header = lines.next().expect("header row");
        assert!(header.starts_with("id,option,time,cost"));
        let first = lines.next().expect("first data row");
        assert!(first.starts_with("bus,"));
        assert!(first.contains('#'));
    }
}
