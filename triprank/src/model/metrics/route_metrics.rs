use super::{CoarseMinutes, CompactNumber, DriveBaseline, MetricsChange, TimeSavings};
use crate::model::context::ScoringContext;
use crate::model::emissions::Pollutant;
use crate::model::physiology::calorie_ops;
use crate::model::route::{ingest_ops, Mode, RouteOption, SubmodeTimes};
use uom::si::f64::{Length, Velocity};
use uom::si::length::{kilometer, meter, mile};
use uom::si::velocity::{meter_per_second, mile_per_hour};

/// calibration factor inflating pure-driving time estimates toward observed
/// real-world conditions
const DRIVE_TIME_FACTOR: f64 = 1.35;

/// smallest yearly time savings worth reporting
const MIN_TIME_SAVINGS_SECONDS: f64 = 60.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// the scored record for one trip option: the raw itinerary plus the
/// rate-dependent quantities stamped at ingest and the baseline-relative
/// results of [`RouteMetrics::set_car_data`]. every other derived quantity
/// is computed on read from the option and the scoring context.
#[derive(Debug, Clone)]
pub struct RouteMetrics {
    pub option: RouteOption,
    /// ride seconds split across transit submodes
    pub times: SubmodeTimes,
    /// transit fare for the option, defaulted from the rate table when the
    /// routing service reports none
    pub transit_cost: f64,
    pub car_cost_yearly: Option<f64>,
    pub parking_cost: Option<f64>,
    pub bike_rental_cost_yearly: Option<f64>,
    /// yearly cost advantage over the all-driving baseline, when positive
    pub cost_savings: Option<f64>,
    /// yearly time advantage over the all-driving baseline
    pub time_savings: Option<TimeSavings>,
    /// yearly weight-loss equivalent of the option's calorie burn
    pub weight_lost: Option<f64>,
    /// emissions advantage over the all-driving baseline, as a truncated
    /// percentage, when positive
    pub emissions_difference: Option<u32>,
}

fn meters_to_miles(meters: f64) -> f64 {
    Length::new::<meter>(meters).get::<mile>()
}

fn meters_to_kilometers(meters: f64) -> f64 {
    Length::new::<meter>(meters).get::<kilometer>()
}

fn mps_to_mph(speed: f64) -> f64 {
    Velocity::new::<meter_per_second>(speed).get::<mile_per_hour>()
}

/// leg duration from distance and speed, guarding the zero-speed case.
fn duration_seconds(distance: f64, speed: f64) -> f64 {
    if speed == 0.0 {
        0.0
    } else {
        distance / speed
    }
}

impl RouteMetrics {
    /// wraps a raw itinerary: aggregates its submode ride times and stamps
    /// the rate-dependent cost fields from the current table.
    pub fn new(option: RouteOption, ctx: &ScoringContext) -> RouteMetrics {
        let times = ingest_ops::aggregate_submode_times(&option);
        let mut metrics = RouteMetrics {
            option,
            times,
            transit_cost: 0.0,
            car_cost_yearly: None,
            parking_cost: None,
            bike_rental_cost_yearly: None,
            cost_savings: None,
            time_savings: None,
            weight_lost: None,
            emissions_difference: None,
        };
        metrics.stamp_rates(ctx);
        metrics
    }

    /// re-derives the fields that depend on the rate table. called at
    /// construction and again by [`RouteMetrics::rescore`] after settings
    /// change.
    pub fn stamp_rates(&mut self, ctx: &ScoringContext) {
        let rates = &ctx.rates;
        self.transit_cost = if self.option.transit_cost > 0.0 {
            self.option.transit_cost
        } else if self.option.has_transit_mode() {
            rates.transit.yearly_round_trip
        } else {
            0.0
        };
        self.car_cost_yearly = (self.option.has_car() || self.option.has_car_park()).then(|| {
            rates.car_cost_per_mile
                * meters_to_kilometers(self.option.drive_distance)
                * rates.trips_per_year
        });
        self.parking_cost = self
            .option
            .has_car()
            .then_some(rates.parking.yearly_round_trip);
        self.bike_rental_cost_yearly = self
            .option
            .has_bicycle_rental()
            .then_some(rates.bicycle_rental.yearly_round_trip);
    }

    /// converted distance for a mode, or the not-applicable sentinel when
    /// the mode is absent. zero is a valid distance and never the sentinel.
    pub fn distance_for(&self, mode: Mode) -> Option<f64> {
        if !self.option.has_mode(mode) {
            return None;
        }
        let meters = match mode {
            Mode::Car | Mode::CarPark => self.option.drive_distance,
            Mode::Bicycle | Mode::BicycleRent => self.option.bike_distance,
            Mode::Walk => self.option.walk_distance,
            _ => return None,
        };
        Some(meters_to_miles(meters))
    }

    pub fn drive_distances(&self) -> Option<f64> {
        self.distance_for(Mode::Car)
    }

    pub fn bike_distances(&self) -> Option<f64> {
        self.distance_for(Mode::Bicycle)
    }

    pub fn walk_distances(&self) -> Option<f64> {
        self.distance_for(Mode::Walk)
    }

    /// expected trip time. pure-driving estimates are inflated by a
    /// calibration factor; anything involving transit or no car at all is
    /// taken as reported.
    pub fn average(&self) -> f64 {
        if self.option.has_transit() || !self.option.has_car() {
            self.option.time.round()
        } else {
            (self.option.time * DRIVE_TIME_FACTOR).round()
        }
    }

    /// the uninflated time estimate, reported only for pure-driving options.
    pub fn freeflow_time(&self) -> Option<f64> {
        if self.option.has_transit() || !self.option.has_car() {
            None
        } else {
            Some(self.option.time.round())
        }
    }

    /// minutes spent waiting for or riding transit.
    pub fn time_in_transit(&self) -> f64 {
        self.option
            .transit
            .iter()
            .map(|leg| leg.wait_stats.avg + leg.ride_stats.avg)
            .sum::<f64>()
            / 60.0
    }

    /// total trip cost across the frequency context, formatted by
    /// magnitude. not applicable when the option has no base cost.
    pub fn calculated_cost(&self, ctx: &ScoringContext) -> Option<CompactNumber> {
        self.calculated_cost_total(ctx).map(CompactNumber::cost)
    }

    pub fn calculated_cost_total(&self, ctx: &ScoringContext) -> Option<f64> {
        if !self.option.has_cost() {
            return None;
        }
        let mut cost = 0.0;
        if self.transit_cost > 0.0 {
            cost += self.transit_cost;
        }
        if self.option.has_car() {
            cost += ctx.rates.car_cost_per_mile * self.drive_distances().unwrap_or_default();
            cost += ctx.rates.parking.daily;
        }
        Some(cost * ctx.rates.trips_per_year)
    }

    /// calories burned across the frequency context. not applicable when
    /// the routing service reports no calorie burn at all.
    pub fn calculated_calories(&self, ctx: &ScoringContext) -> Option<CompactNumber> {
        if self.option.calories == 0.0 {
            return None;
        }
        let total = self.total_calories(ctx) * ctx.rates.trips_per_year;
        Some(CompactNumber::count(total))
    }

    /// per-trip calories from the physiological formulas: walking always,
    /// biking when the option includes a bike leg.
    pub fn total_calories(&self, ctx: &ScoringContext) -> f64 {
        let profile = &ctx.profile;
        let walk_hours =
            duration_seconds(self.option.walk_distance, profile.walk_speed) / SECONDS_PER_HOUR;
        let mut calories =
            calorie_ops::walking_calories(profile.walk_speed, profile.weight_kg, walk_hours);
        if self.option.has_biking() {
            let bike_hours =
                duration_seconds(self.option.bike_distance, profile.bike_speed) / SECONDS_PER_HOUR;
            calories +=
                calorie_ops::biking_calories(profile.bike_speed, profile.weight_kg, bike_hours);
        }
        calories
    }

    /// the per-trip transit fare, or not-applicable when the option has
    /// none.
    pub fn transit_costs(&self) -> Option<f64> {
        (self.transit_cost > 0.0).then_some(self.transit_cost)
    }

    /// service headway in minutes over the plan window, when the routing
    /// service reported a trip count.
    pub fn frequency(&self, ctx: &ScoringContext) -> Option<i64> {
        if self.option.trips == 0.0 {
            return None;
        }
        let hours = ctx.plan_window.hours();
        if hours == 0.0 {
            return None;
        }
        Some((60.0 / (self.option.trips / hours)).round() as i64)
    }

    pub fn walk_time(&self, ctx: &ScoringContext) -> CoarseMinutes {
        CoarseMinutes::from_seconds(duration_seconds(
            self.option.walk_distance,
            ctx.profile.walk_speed,
        ))
    }

    pub fn bike_time(&self, ctx: &ScoringContext) -> CoarseMinutes {
        CoarseMinutes::from_seconds(duration_seconds(
            self.option.bike_distance,
            ctx.profile.bike_speed,
        ))
    }

    pub fn walk_speed_mph(&self, ctx: &ScoringContext) -> f64 {
        (mps_to_mph(ctx.profile.walk_speed) * 10.0).trunc() / 10.0
    }

    pub fn bike_speed_mph(&self, ctx: &ScoringContext) -> f64 {
        (mps_to_mph(ctx.profile.bike_speed) * 10.0).trunc() / 10.0
    }

    /// a short human-readable summary of how the option travels, e.g.
    /// "bike to transit".
    pub fn mode_descriptor(&self) -> String {
        let mut descriptor = if self.option.bike_distance > 0.0 {
            String::from("bike")
        } else if self.option.drive_distance > 0.0 {
            String::from("drive")
        } else {
            String::from("walk")
        };

        if self.option.has_transit() {
            descriptor.push_str(" to transit");
        } else if self.option.drive_distance > 0.0 {
            descriptor = String::from("rideshare");
        }

        descriptor
    }

    /// grams of a pollutant emitted by this option across all modes.
    pub fn emissions(&self, pollutant: Pollutant, ctx: &ScoringContext) -> f64 {
        let model = &ctx.emissions;
        model.car_emission(pollutant, self.option.drive_distance)
            + model.bus_emission(pollutant, self.times.bus)
            + model.coach_emission(pollutant, self.times.sub, self.times.ted)
            + model.train_emission(pollutant, self.times.train)
    }

    /// scores this option's advantage over the all-driving baseline. a
    /// direct-car option is assumed to split its driving with a rideshare
    /// partner, which fixes its advantage at half the baseline cost and
    /// time and a 50% emissions share.
    pub fn set_car_data(&mut self, baseline: &DriveBaseline, ctx: &ScoringContext) {
        let m = ctx.rates.trips_per_year;

        let mut cost_difference = (baseline.cost - self.option.cost) * m;
        let mut emissions_pct = if baseline.emissions == 0.0 {
            0.0
        } else {
            (baseline.emissions - self.emissions(Pollutant::Co2, ctx)) / baseline.emissions * 100.0
        };
        let mut time_savings =
            (self.time_in_transit() - (baseline.time - self.option.time)) * m;

        if self.option.direct_car() {
            cost_difference = baseline.cost * m / 2.0;
            emissions_pct = 50.0;
            time_savings = self.average() * m / 2.0;
        }

        self.cost_savings = (cost_difference > 0.0).then_some(cost_difference);
        self.weight_lost = (self.option.calories != 0.0)
            .then(|| (calorie_ops::calories_to_pounds(self.option.calories) * m).trunc());
        self.time_savings = (time_savings > MIN_TIME_SAVINGS_SECONDS)
            .then(|| TimeSavings::from_seconds(time_savings));
        self.emissions_difference = (emissions_pct > 0.0).then_some(emissions_pct as u32);
    }

    /// re-derives every rate-dependent quantity and announces the full set
    /// of observable attributes, once each, in the fixed contract order.
    pub fn rescore(&mut self, ctx: &ScoringContext) -> Vec<MetricsChange> {
        self.stamp_rates(ctx);
        vec![
            MetricsChange::Average(self.average()),
            MetricsChange::BikeTime(self.bike_time(ctx)),
            MetricsChange::CalculatedCost(self.calculated_cost(ctx)),
            MetricsChange::CalculatedCalories(self.calculated_calories(ctx)),
            MetricsChange::TransitCosts(self.transit_costs()),
            MetricsChange::TripsPerYear(ctx.rates.trips_per_year),
            MetricsChange::CarParkingCost(ctx.rates.parking.daily),
            MetricsChange::VmtRate(ctx.rates.car_cost_per_mile),
            MetricsChange::WalkTime(self.walk_time(ctx)),
        ]
    }
}
