use std::fmt::Display;

/// names which of the four [`super::FareSchedule`] keys a trip-frequency
/// multiplier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSelector {
    Daily,
    DailyRoundTrip,
    Yearly,
    YearlyRoundTrip,
}

/// multiplier band table, carried over verbatim from observed behavior.
/// a single daily trip has a unit multiplier and a daily round trip doubles
/// it; yearly multipliers land in the two upper bands only while the rate
/// table's trips-per-year stays roughly within (184, 367) — outside that
/// range the bands misclassify, and this is deliberately not corrected here.
const DAILY_ONE_WAY: f64 = 1.0;
const DAILY_ROUND_TRIP: f64 = 2.0;
const YEARLY_ONE_WAY_BAND: (f64, f64) = (150.0, 367.0);
const YEARLY_ROUND_TRIP_MIN: f64 = 368.0;

impl RateSelector {
    /// classifies a resolved trip multiplier into the fare key it selects.
    /// values outside every band fall back to the one-way daily rate.
    pub fn from_multiplier(multiplier: f64) -> RateSelector {
        if multiplier == DAILY_ONE_WAY {
            RateSelector::Daily
        } else if multiplier == DAILY_ROUND_TRIP {
            RateSelector::DailyRoundTrip
        } else if YEARLY_ONE_WAY_BAND.0 < multiplier && multiplier < YEARLY_ONE_WAY_BAND.1 {
            RateSelector::Yearly
        } else if multiplier >= YEARLY_ROUND_TRIP_MIN {
            RateSelector::YearlyRoundTrip
        } else {
            RateSelector::Daily
        }
    }
}

impl Display for RateSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RateSelector::Daily => "daily",
            RateSelector::DailyRoundTrip => "dailyRoundTrip",
            RateSelector::Yearly => "yearly",
            RateSelector::YearlyRoundTrip => "yearlyRoundTrip",
        };
        write!(f, "{}", s)
    }
}
