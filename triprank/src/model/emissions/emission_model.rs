use super::{EmissionRates, FuelType, Pollutant};

/// fixed average operating speeds per transit submode, in meters per second.
/// multiplied by ride time they recover the distance the emission factors
/// apply to.
pub const SPEED_BUS: f64 = 4.2; // ~15 km/h
pub const SPEED_TED: f64 = 10.0; // ~36 km/h
pub const SPEED_SUB: f64 = 5.6; // ~20 km/h
pub const SPEED_TRAIN: f64 = 25.0; // ~90 km/h

const METERS_PER_KILOMETER: f64 = 1000.0;

/// converts time-in-mode and drive distance into pollutant mass in grams.
/// the selected car fuel type is the only piece of state.
#[derive(Debug, Clone, Default)]
pub struct EmissionModel {
    rates: EmissionRates,
    fuel_type: FuelType,
}

impl EmissionModel {
    pub fn new(rates: EmissionRates, fuel_type: FuelType) -> EmissionModel {
        EmissionModel { rates, fuel_type }
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn set_fuel_type(&mut self, fuel_type: FuelType) {
        log::debug!("car emission factors switched to {}", fuel_type);
        self.fuel_type = fuel_type;
    }

    /// grams emitted driving the given distance in meters.
    pub fn car_emission(&self, pollutant: Pollutant, drive_distance: f64) -> f64 {
        self.rates.factors(pollutant).car_factor(self.fuel_type) * drive_distance
            / METERS_PER_KILOMETER
    }

    /// grams emitted riding the primary bus network for the given seconds.
    pub fn bus_emission(&self, pollutant: Pollutant, seconds: f64) -> f64 {
        self.rates.factors(pollutant).bus * SPEED_BUS * seconds / METERS_PER_KILOMETER
    }

    /// grams emitted on the two coach subnetworks, which share a factor but
    /// run at different average speeds.
    pub fn coach_emission(&self, pollutant: Pollutant, sub_seconds: f64, ted_seconds: f64) -> f64 {
        let factor = self.rates.factors(pollutant).coach;
        factor * (SPEED_SUB * sub_seconds + SPEED_TED * ted_seconds) / METERS_PER_KILOMETER
    }

    /// grams emitted riding rail for the given seconds.
    pub fn train_emission(&self, pollutant: Pollutant, seconds: f64) -> f64 {
        self.rates.factors(pollutant).train * SPEED_TRAIN * seconds / METERS_PER_KILOMETER
    }
}
