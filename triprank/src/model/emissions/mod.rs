mod emission_model;
mod emission_rates;
mod fuel_type;
mod pollutant;

pub use emission_model::EmissionModel;
pub use emission_rates::{EmissionRates, PollutantFactors};
pub use fuel_type::FuelType;
pub use pollutant::Pollutant;
