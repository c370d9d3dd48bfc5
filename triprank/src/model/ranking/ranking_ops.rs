//! the multi-criteria ranking pass: flatten each option into a row, scale
//! the two selected criteria over their observed domains, and sort by the
//! compound rank.

use super::color_scale::WHITE;
use super::{ColorScale, LinearScale, RankingCriterion, RankingRow, Rgb};
use crate::model::context::ScoringContext;
use crate::model::emissions::Pollutant;
use crate::model::metrics::RouteMetrics;
use crate::model::rates::{RateSelector, RateTable, TripFrequency};
use itertools::{Itertools, MinMaxResult};
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter};

/// gradient accents: amber for the primary criterion, green for the
/// secondary, both fading to white at the worst value.
const PRIMARY_ACCENT: Rgb = Rgb {
    r: 0xf5,
    g: 0xa8,
    b: 0x1c,
};
const SECONDARY_ACCENT: Rgb = Rgb {
    r: 0x8e,
    g: 0xc4,
    b: 0x49,
};

/// the physical quantities scaled by a trip-frequency multiplier, unlike
/// monetary cost, which is re-resolved from the rate table instead.
fn scale_physical_quantities(row: &mut RankingRow, multiplier: f64) {
    row.calories *= multiplier;
    row.weight_lost *= multiplier;
    row.productive_time *= multiplier;
    row.time_savings *= multiplier;
    row.emissions *= multiplier;
    row.emissions_nox *= multiplier;
    row.emissions_pm10 *= multiplier;
}

/// the full ranking pass for one frequency context and criteria pair.
pub fn rank_options(
    metrics: &[RouteMetrics],
    ctx: &ScoringContext,
    primary: RankingCriterion,
    secondary: RankingCriterion,
    frequency: &TripFrequency,
) -> Vec<RankingRow> {
    let multiplier = frequency.multiplier(ctx.rates.trips_per_year);
    log::debug!(
        "ranking {} options by {} / {} at multiplier {}",
        metrics.len(),
        primary,
        secondary,
        multiplier
    );
    let rows = metrics
        .iter()
        .enumerate()
        .map(|(index, m)| build_row(m, ctx, multiplier, index))
        .collect();
    rank_rows(rows, primary, secondary)
}

/// flattens one option's metrics into a ranking row, applying the
/// trip-frequency multiplier when one is in effect.
pub fn build_row(
    metrics: &RouteMetrics,
    ctx: &ScoringContext,
    multiplier: f64,
    index: usize,
) -> RankingRow {
    let mut row = RankingRow::new(index);
    row.time = metrics.average();
    row.cost = metrics.option.cost;
    row.walk_distance = metrics.walk_distances().unwrap_or_default();
    row.calories = metrics.total_calories(ctx);
    row.weight_lost =
        metrics.weight_lost.unwrap_or_default() * 1000.0 / ctx.rates.trips_per_year;
    row.productive_time = metrics.time_in_transit();
    row.time_savings = metrics
        .time_savings
        .map(|t| t.as_minutes())
        .unwrap_or_default();
    row.emissions = metrics.emissions(Pollutant::Co2, ctx);
    row.emissions_nox = metrics.emissions(Pollutant::NOx, ctx);
    row.emissions_pm10 = metrics.emissions(Pollutant::Pm10, ctx);
    row.score = metrics.option.score;

    if multiplier > 1.0 {
        scale_physical_quantities(&mut row, multiplier);
        if let Some(cost) = frequency_cost(metrics, multiplier, &ctx.rates) {
            row.cost = cost;
        }
    }

    row
}

/// per-mode-present cost of the option under a frequency multiplier: fares
/// resolve through the selector band the multiplier falls in, and driving
/// adds its per-kilometer cost scaled by the multiplier directly.
pub fn frequency_cost(
    metrics: &RouteMetrics,
    multiplier: f64,
    rates: &RateTable,
) -> Option<f64> {
    let selector = RateSelector::from_multiplier(multiplier);
    let option = &metrics.option;
    let mut cost = 0.0;
    if option.has_transit() {
        cost += rates.transit.get(selector);
    }
    if option.has_bicycle_rental() {
        cost += rates.bicycle_rental.get(selector);
    }
    if option.has_car() || option.has_car_park() {
        if option.has_car() {
            cost += rates.parking.get(selector);
        }
        let km = Length::new::<meter>(option.drive_distance).get::<kilometer>();
        cost += rates.car_cost_per_mile * km * multiplier;
    }
    (cost != 0.0).then_some(cost)
}

/// assigns domain-scaled ranks and gradient colors, then sorts ascending.
/// the sort is stable, so equal compound ranks keep their original order.
pub fn rank_rows(
    mut rows: Vec<RankingRow>,
    primary: RankingCriterion,
    secondary: RankingCriterion,
) -> Vec<RankingRow> {
    if rows.is_empty() {
        return rows;
    }
    let n = rows.len() as f64;
    let primary_domain = domain(&rows, primary);
    let secondary_domain = domain(&rows, secondary);

    let primary_scale = LinearScale::new(primary_domain, (0.0, n * 2.0));
    let secondary_scale = LinearScale::new(secondary_domain, (1.0, n));
    let primary_color = ColorScale::new(primary_domain, PRIMARY_ACCENT, WHITE);
    let secondary_color = ColorScale::new(secondary_domain, SECONDARY_ACCENT, WHITE);

    for row in rows.iter_mut() {
        let p = primary.extract(row);
        let s = secondary.extract(row);
        row.primary_rank = primary_scale.apply(p);
        row.primary_color = primary_color.apply(p);
        row.secondary_rank = secondary_scale.apply(s);
        row.secondary_color = secondary_color.apply(s);
        row.rank = row.primary_rank + row.secondary_rank;
    }

    rows.sort_by(|a, b| a.rank.total_cmp(&b.rank));
    rows
}

/// observed [min, max] of a criterion across the row set.
fn domain(rows: &[RankingRow], criterion: RankingCriterion) -> (f64, f64) {
    match rows.iter().map(|row| criterion.extract(row)).minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}
