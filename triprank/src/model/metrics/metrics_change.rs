use super::{CoarseMinutes, CompactNumber};
use crate::model::fieldname;

/// a change notification emitted by a rescore pass. observers in the
/// rendering layer subscribe by attribute name; every rescore announces all
/// nine attributes exactly once, in the order of
/// [`fieldname::RESCORE_ATTRIBUTES`].
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsChange {
    Average(f64),
    BikeTime(CoarseMinutes),
    CalculatedCost(Option<CompactNumber>),
    CalculatedCalories(Option<CompactNumber>),
    TransitCosts(Option<f64>),
    TripsPerYear(f64),
    CarParkingCost(f64),
    VmtRate(f64),
    WalkTime(CoarseMinutes),
}

impl MetricsChange {
    /// the attribute name observers subscribe to for this change.
    pub fn attribute(&self) -> &'static str {
        match self {
            MetricsChange::Average(_) => fieldname::AVERAGE,
            MetricsChange::BikeTime(_) => fieldname::BIKE_TIME,
            MetricsChange::CalculatedCost(_) => fieldname::CALCULATED_COST,
            MetricsChange::CalculatedCalories(_) => fieldname::CALCULATED_CALORIES,
            MetricsChange::TransitCosts(_) => fieldname::TRANSIT_COSTS,
            MetricsChange::TripsPerYear(_) => fieldname::TRIPS_PER_YEAR,
            MetricsChange::CarParkingCost(_) => fieldname::CAR_PARKING_COST,
            MetricsChange::VmtRate(_) => fieldname::VMT_RATE,
            MetricsChange::WalkTime(_) => fieldname::WALK_TIME,
        }
    }
}
