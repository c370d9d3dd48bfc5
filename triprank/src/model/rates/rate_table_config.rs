use super::{FareSchedule, RateTable};
use serde::{Deserialize, Serialize};

/// the serialized shape of the rate configuration asset. field names match
/// the upstream JSON document, so deployments can drop in their own rates
/// without translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateTableConfig {
    pub parking: FareScheduleConfig,
    pub transit: FareScheduleConfig,
    pub bicycle_rental: FareScheduleConfig,
    pub car_cost_per_mile: f64,
    pub trips_per_year: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FareScheduleConfig {
    pub daily: f64,
    pub daily_round_trip: Option<f64>,
    pub yearly: f64,
    pub yearly_round_trip: Option<f64>,
    /// factor applied to the daily rate when a round-trip daily rate is not
    /// stated explicitly
    pub increase_round_trip: f64,
}

impl Default for FareScheduleConfig {
    fn default() -> Self {
        FareScheduleConfig {
            daily: 0.0,
            daily_round_trip: None,
            yearly: 0.0,
            yearly_round_trip: None,
            increase_round_trip: 2.0,
        }
    }
}

impl Default for RateTableConfig {
    fn default() -> Self {
        RateTableConfig {
            parking: FareScheduleConfig {
                daily: 5.0,
                daily_round_trip: None,
                yearly: 620.0,
                yearly_round_trip: None,
                increase_round_trip: 1.5,
            },
            transit: FareScheduleConfig {
                daily: 1.6,
                daily_round_trip: Some(3.2),
                yearly: 274.0,
                yearly_round_trip: Some(274.0),
                increase_round_trip: 2.0,
            },
            bicycle_rental: FareScheduleConfig {
                daily: 1.5,
                daily_round_trip: Some(2.5),
                yearly: 25.0,
                yearly_round_trip: Some(25.0),
                increase_round_trip: 2.0,
            },
            car_cost_per_mile: 0.59,
            trips_per_year: 260.0,
        }
    }
}

impl FareScheduleConfig {
    /// derives the full four-key schedule, filling unstated round-trip
    /// variants from the base values.
    pub fn to_schedule(&self) -> FareSchedule {
        FareSchedule {
            daily: self.daily,
            daily_round_trip: self
                .daily_round_trip
                .unwrap_or(self.daily * self.increase_round_trip),
            yearly: self.yearly,
            yearly_round_trip: self.yearly_round_trip.unwrap_or(self.yearly),
        }
    }
}

impl From<&RateTableConfig> for RateTable {
    fn from(config: &RateTableConfig) -> Self {
        RateTable {
            parking: config.parking.to_schedule(),
            transit: config.transit.to_schedule(),
            bicycle_rental: config.bicycle_rental.to_schedule(),
            car_cost_per_mile: config.car_cost_per_mile,
            trips_per_year: config.trips_per_year,
            round_trip_factor: config.parking.increase_round_trip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_round_trip_keys() {
        let config = FareScheduleConfig {
            daily: 4.0,
            daily_round_trip: None,
            yearly: 100.0,
            yearly_round_trip: None,
            increase_round_trip: 1.5,
        };
        let schedule = config.to_schedule();
        assert_eq!(schedule.daily_round_trip, 6.0);
        assert_eq!(schedule.yearly_round_trip, 100.0);
    }

    #[test]
    fn test_explicit_keys_win() {
        let config = FareScheduleConfig {
            daily: 4.0,
            daily_round_trip: Some(7.0),
            yearly: 100.0,
            yearly_round_trip: Some(90.0),
            increase_round_trip: 1.5,
        };
        let schedule = config.to_schedule();
        assert_eq!(schedule.daily_round_trip, 7.0);
        assert_eq!(schedule.yearly_round_trip, 90.0);
    }

    #[test]
    fn test_asset_deserialization() {
        let input = serde_json::json!({
            "parking": { "daily": 5.0, "yearly": 620.0, "increaseRoundTrip": 1.5 },
            "transit": { "daily": 1.6, "yearly": 274.0 },
            "bicycleRental": { "daily": 1.5, "yearly": 25.0 },
            "carCostPerMile": 0.59,
            "tripsPerYear": 260
        });
        let config: RateTableConfig =
            serde_json::from_value(input).expect("asset shape should deserialize");
        let rates = RateTable::from(&config);
        assert_eq!(rates.parking.daily_round_trip, 7.5);
        assert_eq!(rates.trips_per_year, 260.0);
    }
}
