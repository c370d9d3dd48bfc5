//! resolves the trip-frequency context a user selects (one-way vs round
//! trip, single day vs a year of commuting) into the scalar multiplier
//! applied to physical quantities and the rate key used for monetary cost.

use super::RateSelector;

/// the user's trip-frequency selection. defaults to a single one-way trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFrequency {
    pub one_way: bool,
    pub daily: bool,
}

impl Default for TripFrequency {
    fn default() -> Self {
        TripFrequency {
            one_way: true,
            daily: true,
        }
    }
}

impl TripFrequency {
    /// the scalar applied to per-trip physical quantities: round trips
    /// double a single leg, and a year of commuting scales by the commute
    /// days per year from the rate table.
    pub fn multiplier(&self, trips_per_year: f64) -> f64 {
        let leg_factor = if self.one_way { 1.0 } else { 2.0 };
        let period_factor = if self.daily { 1.0 } else { trips_per_year };
        leg_factor * period_factor
    }

    /// the rate key this frequency selection resolves to.
    pub fn selector(&self, trips_per_year: f64) -> RateSelector {
        RateSelector::from_multiplier(self.multiplier(trips_per_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency(one_way: bool, daily: bool) -> TripFrequency {
        TripFrequency { one_way, daily }
    }

    #[test]
    fn test_one_way_daily() {
        let f = frequency(true, true);
        assert_eq!(f.multiplier(260.0), 1.0);
        assert_eq!(f.selector(260.0), RateSelector::Daily);
    }

    #[test]
    fn test_round_trip_daily() {
        let f = frequency(false, true);
        assert_eq!(f.multiplier(260.0), 2.0);
        assert_eq!(f.selector(260.0), RateSelector::DailyRoundTrip);
    }

    #[test]
    fn test_one_way_yearly() {
        let f = frequency(true, false);
        assert_eq!(f.multiplier(260.0), 260.0);
        assert_eq!(f.selector(260.0), RateSelector::Yearly);
    }

    #[test]
    fn test_round_trip_yearly() {
        let f = frequency(false, false);
        assert_eq!(f.multiplier(260.0), 520.0);
        assert_eq!(f.selector(260.0), RateSelector::YearlyRoundTrip);
    }
}
