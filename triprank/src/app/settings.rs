use crate::model::context::PlanWindow;
use crate::model::emissions::FuelType;
use crate::model::profile::bike_preference::{self, BikePreference};
use crate::model::profile::RiderProfile;
use crate::model::rates::RateSettings;
use crate::model::ScoringError;
use serde::Deserialize;

/// optional user settings layered over the engine defaults: rider profile,
/// the car's fuel type, the commute window, bike comfort weightings, and
/// the user-editable rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub profile: RiderProfile,
    pub fuel_type: FuelType,
    pub plan_window: PlanWindow,
    /// raw bike comfort weightings, normalized before they reach the
    /// routing request
    pub bike_safe: f64,
    pub bike_slope: f64,
    pub bike_time: f64,
    pub rates: Option<RateSettings>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            profile: RiderProfile::default(),
            fuel_type: FuelType::default(),
            plan_window: PlanWindow::default(),
            bike_safe: 1.0,
            bike_slope: 1.0,
            bike_time: 1.0,
            rates: None,
        }
    }
}

impl AppSettings {
    /// the bike comfort weightings as integer percentages summing to 100,
    /// the form the routing request expects.
    pub fn bike_preference(&self) -> BikePreference {
        bike_preference::normalize_percentages(self.bike_safe, self.bike_slope, self.bike_time)
    }

    /// loads settings from a TOML file, with `TRIPRANK_`-prefixed
    /// environment variables taking precedence.
    pub fn from_file(filename: &str) -> Result<AppSettings, ScoringError> {
        let source = config::Config::builder()
            .add_source(config::File::with_name(filename))
            .add_source(config::Environment::with_prefix("TRIPRANK"))
            .build()?;
        let settings = source.try_deserialize::<AppSettings>()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.fuel_type, FuelType::Diesel);
        assert_eq!(settings.profile.walk_speed, 1.4);
        assert!(settings.rates.is_none());
    }

    #[test]
    fn test_bike_preference_normalized() {
        let settings = AppSettings::default();
        let preference = settings.bike_preference();
        assert_eq!(preference.safe + preference.slope + preference.time, 100);
    }
}
