use super::{FuelType, Pollutant};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// per-mode emission factors for a single pollutant, in grams per
/// vehicle-kilometer. car factors vary by fuel type; transit factors are
/// fleet averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollutantFactors {
    pub car: HashMap<FuelType, f64>,
    pub bus: f64,
    pub coach: f64,
    pub train: f64,
}

impl Default for PollutantFactors {
    fn default() -> Self {
        PollutantFactors {
            car: HashMap::new(),
            bus: 0.0,
            coach: 0.0,
            train: 0.0,
        }
    }
}

impl PollutantFactors {
    /// the car factor for a fuel type; fuels missing from the table emit
    /// nothing rather than failing the scoring pass.
    pub fn car_factor(&self, fuel_type: FuelType) -> f64 {
        self.car.get(&fuel_type).copied().unwrap_or_default()
    }
}

/// the three per-pollutant factor tables, deserializable from a JSON asset
/// so deployments can substitute regional figures. the compiled-in defaults
/// are typical per-passenger-kilometer values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmissionRates {
    pub co2: PollutantFactors,
    pub nox: PollutantFactors,
    pub pm10: PollutantFactors,
}

impl EmissionRates {
    pub fn factors(&self, pollutant: Pollutant) -> &PollutantFactors {
        match pollutant {
            Pollutant::Co2 => &self.co2,
            Pollutant::NOx => &self.nox,
            Pollutant::Pm10 => &self.pm10,
        }
    }
}

impl Default for EmissionRates {
    fn default() -> Self {
        EmissionRates {
            co2: PollutantFactors {
                car: HashMap::from([
                    (FuelType::Diesel, 120.0),
                    (FuelType::Gasoline, 134.0),
                    (FuelType::Hybrid, 92.0),
                    (FuelType::Electric, 0.0),
                ]),
                bus: 101.0,
                coach: 68.0,
                train: 14.0,
            },
            nox: PollutantFactors {
                car: HashMap::from([
                    (FuelType::Diesel, 0.48),
                    (FuelType::Gasoline, 0.06),
                    (FuelType::Hybrid, 0.04),
                    (FuelType::Electric, 0.0),
                ]),
                bus: 0.41,
                coach: 0.33,
                train: 0.02,
            },
            pm10: PollutantFactors {
                car: HashMap::from([
                    (FuelType::Diesel, 0.045),
                    (FuelType::Gasoline, 0.032),
                    (FuelType::Hybrid, 0.025),
                    (FuelType::Electric, 0.015),
                ]),
                bus: 0.024,
                coach: 0.02,
                train: 0.003,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fuel_emits_nothing() {
        let factors = PollutantFactors::default();
        assert_eq!(factors.car_factor(FuelType::Diesel), 0.0);
    }

    #[test]
    fn test_asset_deserialization() {
        let input = serde_json::json!({
            "co2": {
                "car": { "diesel": 111.0, "gasoline": 123.0 },
                "bus": 95.0,
                "coach": 60.0,
                "train": 12.0
            }
        });
        let rates: EmissionRates =
            serde_json::from_value(input).expect("asset shape should deserialize");
        assert_eq!(rates.co2.car_factor(FuelType::Diesel), 111.0);
        assert_eq!(rates.co2.bus, 95.0);
        // sections absent from the asset fall back to empty tables
        assert_eq!(rates.nox.train, 0.0);
    }
}
