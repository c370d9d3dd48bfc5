//! attribute names shared with the rendering layer. observers subscribe to
//! change notifications by these names, so they are part of the engine's
//! public contract and must not drift from the client vocabulary.

pub const AVERAGE: &str = "average";
pub const BIKE_TIME: &str = "bikeTime";
pub const CALCULATED_COST: &str = "calculatedCost";
pub const CALCULATED_CALORIES: &str = "calculatedCalories";
pub const TRANSIT_COSTS: &str = "transitCosts";
pub const TRIPS_PER_YEAR: &str = "tripsPerYear";
pub const CAR_PARKING_COST: &str = "carParkingCost";
pub const VMT_RATE: &str = "vmtRate";
pub const WALK_TIME: &str = "walkTime";

/// the attributes re-announced by a rescore pass, in emission order.
pub const RESCORE_ATTRIBUTES: [&str; 9] = [
    AVERAGE,
    BIKE_TIME,
    CALCULATED_COST,
    CALCULATED_CALORIES,
    TRANSIT_COSTS,
    TRIPS_PER_YEAR,
    CAR_PARKING_COST,
    VMT_RATE,
    WALK_TIME,
];
