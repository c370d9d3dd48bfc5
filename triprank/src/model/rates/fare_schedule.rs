use super::RateSelector;
use serde::{Deserialize, Serialize};

/// the four costs carried for each fare category. round-trip and yearly
/// variants are derived from the base values at construction time when the
/// source asset does not state them explicitly (see [`super::RateTableConfig`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSchedule {
    pub daily: f64,
    pub daily_round_trip: f64,
    pub yearly: f64,
    pub yearly_round_trip: f64,
}

impl FareSchedule {
    pub fn get(&self, selector: RateSelector) -> f64 {
        match selector {
            RateSelector::Daily => self.daily,
            RateSelector::DailyRoundTrip => self.daily_round_trip,
            RateSelector::Yearly => self.yearly,
            RateSelector::YearlyRoundTrip => self.yearly_round_trip,
        }
    }
}
