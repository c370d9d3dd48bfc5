//! the preparation pass over a fresh option list: wrap each raw itinerary
//! in metrics, locate the all-driving alternative, and score every option
//! against it.

use super::{DriveBaseline, RouteMetrics};
use crate::model::context::ScoringContext;
use crate::model::emissions::Pollutant;
use crate::model::route::RouteOption;

/// wraps each option and applies the baseline comparison when an
/// all-driving option exists in the set.
pub fn prepare(options: Vec<RouteOption>, ctx: &ScoringContext) -> Vec<RouteMetrics> {
    let mut metrics: Vec<RouteMetrics> = options
        .into_iter()
        .map(|option| RouteMetrics::new(option, ctx))
        .collect();

    match find_drive_baseline(&metrics, ctx) {
        Some(baseline) => {
            for m in metrics.iter_mut() {
                m.set_car_data(&baseline, ctx);
            }
        }
        None => {
            log::debug!("no all-driving option in result set, skipping baseline comparison");
        }
    }

    metrics
}

/// the first option that starts with a car access leg and uses no transit
/// becomes the drive baseline.
pub fn find_drive_baseline(
    metrics: &[RouteMetrics],
    ctx: &ScoringContext,
) -> Option<DriveBaseline> {
    let drive = metrics.iter().find(|m| {
        let car_access = m
            .option
            .access
            .first()
            .is_some_and(|leg| leg.mode.eq_ignore_ascii_case("car"));
        car_access && !m.option.has_transit()
    })?;

    Some(DriveBaseline {
        cost: drive.car_cost_yearly.unwrap_or_default() + drive.parking_cost.unwrap_or_default(),
        emissions: drive.emissions(Pollutant::Co2, ctx),
        time: drive.average(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::route::{AccessLeg, Mode};

    fn mock_context() -> ScoringContext {
        ScoringContext::default()
    }

    fn drive_option(drive_distance: f64) -> RouteOption {
        RouteOption {
            modes: vec![Mode::Car],
            access: vec![AccessLeg {
                mode: String::from("CAR"),
                time: 1800.0,
            }],
            time: 1800.0,
            cost: 5.0,
            drive_distance,
            ..Default::default()
        }
    }

    fn walk_option() -> RouteOption {
        RouteOption {
            modes: vec![Mode::Walk],
            access: vec![AccessLeg {
                mode: String::from("WALK"),
                time: 2400.0,
            }],
            time: 2400.0,
            cost: 0.0,
            walk_distance: 3000.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_from_first_driving_option() {
        let ctx = mock_context();
        let metrics = prepare(vec![walk_option(), drive_option(10000.0)], &ctx);

        let drive = &metrics[1];
        let expected_cost =
            drive.car_cost_yearly.unwrap_or_default() + drive.parking_cost.unwrap_or_default();
        let baseline = find_drive_baseline(&metrics, &ctx).expect("driving option present");
        assert!((baseline.cost - expected_cost).abs() < 1e-9);
        assert_eq!(baseline.time, 2430.0);
        assert!(baseline.emissions > 0.0);
    }

    #[test]
    fn test_prepare_scores_every_option_against_baseline() {
        let ctx = mock_context();
        let metrics = prepare(vec![walk_option(), drive_option(10000.0)], &ctx);

        // the walking option saves the full baseline cost and emissions
        assert!(metrics[0].cost_savings.is_some());
        assert_eq!(metrics[0].emissions_difference, Some(100));
        // the driving option itself takes the split-driving assumption
        assert_eq!(metrics[1].emissions_difference, Some(50));
    }

    #[test]
    fn test_no_driving_option_skips_baseline() {
        let ctx = mock_context();
        let metrics = prepare(vec![walk_option()], &ctx);
        assert_eq!(metrics[0].cost_savings, None);
        assert_eq!(metrics[0].emissions_difference, None);
    }

    #[test]
    fn test_drive_to_transit_is_not_the_baseline() {
        use crate::model::route::{LegStats, TransitLeg, TransitRoute};
        let ctx = mock_context();
        let park_and_ride = RouteOption {
            modes: vec![Mode::CarPark, Mode::Rail],
            access: vec![AccessLeg {
                mode: String::from("CAR"),
                time: 600.0,
            }],
            transit: vec![TransitLeg {
                routes: vec![TransitRoute {
                    id: None,
                    mode: String::from("RAIL"),
                    agency_name: String::from("sncf"),
                }],
                ride_stats: LegStats { avg: 1200.0 },
                wait_stats: LegStats { avg: 300.0 },
            }],
            time: 2700.0,
            cost: 4.0,
            drive_distance: 5000.0,
            ..Default::default()
        };
        let metrics = prepare(vec![park_and_ride], &ctx);
        assert!(find_drive_baseline(&metrics, &ctx).is_none());
        assert_eq!(metrics[0].cost_savings, None);
    }
}
