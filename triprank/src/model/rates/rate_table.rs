use super::{FareSchedule, RateTableConfig};
use serde::Deserialize;

/// the shared monetary and frequency constants every scoring pass reads.
/// one table lives on the scoring context for the life of the process;
/// [`RateTable::apply_settings`] is the single mutation entrypoint, so the
/// derived round-trip keys can never drift from their base values.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub parking: FareSchedule,
    pub transit: FareSchedule,
    pub bicycle_rental: FareSchedule,
    /// per-mile operating cost of driving, also used as the vmt rate
    pub car_cost_per_mile: f64,
    pub trips_per_year: f64,
    pub(super) round_trip_factor: f64,
}

/// the user-editable subset of the rate table. values are applied as given;
/// callers are expected to validate, as non-finite inputs propagate into
/// every dependent metric.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateSettings {
    #[serde(alias = "carParkingCost")]
    pub car_parking_cost: f64,
    #[serde(alias = "carParkingCostYearly")]
    pub car_parking_cost_yearly: f64,
    #[serde(alias = "carCostPerMile")]
    pub car_cost_per_mile: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::from(&RateTableConfig::default())
    }
}

impl RateTable {
    /// overwrites the user-editable base rates and recomputes the keys
    /// derived from them. round trips have no separate yearly parking rate
    /// in the source data, so the yearly value covers both.
    pub fn apply_settings(&mut self, settings: &RateSettings) {
        self.parking.daily = settings.car_parking_cost;
        self.parking.daily_round_trip = self.parking.daily * self.round_trip_factor;
        self.parking.yearly = settings.car_parking_cost_yearly;
        self.parking.yearly_round_trip = settings.car_parking_cost_yearly;
        self.car_cost_per_mile = settings.car_cost_per_mile;
        log::debug!(
            "applied rate settings: parking {}/{} per day, {} per year, {} per mile",
            self.parking.daily,
            self.parking.daily_round_trip,
            self.parking.yearly,
            self.car_cost_per_mile
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_settings_recomputes_derived_keys() {
        let mut rates = RateTable::default();
        rates.apply_settings(&RateSettings {
            car_parking_cost: 8.0,
            car_parking_cost_yearly: 900.0,
            car_cost_per_mile: 0.62,
        });
        assert_eq!(rates.parking.daily, 8.0);
        assert_eq!(rates.parking.daily_round_trip, 12.0);
        assert_eq!(rates.parking.yearly, 900.0);
        assert_eq!(rates.parking.yearly_round_trip, 900.0);
        assert_eq!(rates.car_cost_per_mile, 0.62);
    }

    #[test]
    fn test_non_parking_schedules_untouched() {
        let mut rates = RateTable::default();
        let transit_before = rates.transit;
        rates.apply_settings(&RateSettings {
            car_parking_cost: 8.0,
            car_parking_cost_yearly: 900.0,
            car_cost_per_mile: 0.62,
        });
        assert_eq!(rates.transit, transit_before);
    }
}
