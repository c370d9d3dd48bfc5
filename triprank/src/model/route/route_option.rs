use super::{AccessLeg, Mode, TransitLeg};
use serde::{Deserialize, Serialize};

/// one candidate itinerary as returned by the external routing service.
/// immutable once ingested; every derived quantity lives on
/// [`crate::model::metrics::RouteMetrics`].
///
/// distances are meters, times are seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteOption {
    pub id: Option<String>,
    pub modes: Vec<Mode>,
    pub access: Vec<AccessLeg>,
    pub egress: Vec<AccessLeg>,
    pub transit: Vec<TransitLeg>,
    pub time: f64,
    pub cost: f64,
    pub transit_cost: f64,
    pub calories: f64,
    pub drive_distance: f64,
    pub bike_distance: f64,
    pub walk_distance: f64,
    pub trips: f64,
    pub score: f64,
}

impl RouteOption {
    pub fn has_mode(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn has_car(&self) -> bool {
        self.has_mode(Mode::Car)
    }

    pub fn has_car_park(&self) -> bool {
        self.has_mode(Mode::CarPark)
    }

    pub fn has_biking(&self) -> bool {
        self.has_mode(Mode::Bicycle)
    }

    pub fn has_bicycle_rental(&self) -> bool {
        self.has_mode(Mode::BicycleRent)
    }

    pub fn has_walking(&self) -> bool {
        self.has_mode(Mode::Walk)
    }

    pub fn has_transit(&self) -> bool {
        !self.transit.is_empty()
    }

    /// whether any scheduled-transit mode tag is present, independent of
    /// the transit leg list.
    pub fn has_transit_mode(&self) -> bool {
        self.has_mode(Mode::Bus) || self.has_mode(Mode::Tram) || self.has_mode(Mode::Rail)
    }

    /// a single-mode driving itinerary.
    pub fn direct_car(&self) -> bool {
        self.modes.len() == 1 && self.has_car()
    }

    /// a bike or walk journey with no transit and no driving.
    pub fn direct_bike_or_walk(&self) -> bool {
        !self.has_transit() && !self.has_car()
    }

    pub fn has_cost(&self) -> bool {
        self.cost > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_deserialization() {
        let input = serde_json::json!({
            "id": "opt-3",
            "modes": ["walk", "bus"],
            "access": [{ "mode": "WALK", "time": 300.0 }],
            "transit": [{
                "routes": [{ "id": "42", "mode": "BUS", "agencyName": "metro" }],
                "rideStats": { "avg": 900.0 },
                "waitStats": { "avg": 120.0 }
            }],
            "time": 2400.0,
            "cost": 2.0,
            "walkDistance": 850.0
        });
        let option: RouteOption =
            serde_json::from_value(input).expect("itinerary shape should deserialize");
        assert!(option.has_transit());
        assert!(option.has_walking());
        assert!(!option.has_car());
        assert_eq!(option.transit[0].ride_stats.avg, 900.0);
        assert_eq!(option.drive_distance, 0.0);
    }

    #[test]
    fn test_direct_car() {
        let option = RouteOption {
            modes: vec![Mode::Car],
            ..Default::default()
        };
        assert!(option.direct_car());

        let multi = RouteOption {
            modes: vec![Mode::Car, Mode::Walk],
            ..Default::default()
        };
        assert!(!multi.direct_car());
    }

    #[test]
    fn test_direct_bike_or_walk() {
        let walk = RouteOption {
            modes: vec![Mode::Walk],
            ..Default::default()
        };
        assert!(walk.direct_bike_or_walk());

        let drive = RouteOption {
            modes: vec![Mode::Car],
            ..Default::default()
        };
        assert!(!drive.direct_bike_or_walk());
    }
}
