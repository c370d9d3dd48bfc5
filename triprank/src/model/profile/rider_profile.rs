use serde::{Deserialize, Serialize};

/// the commuter's physiology and self-reported travel speeds, read by the
/// calorie and walk/bike time metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderProfile {
    pub weight_kg: f64,
    /// walking speed in m/s
    pub walk_speed: f64,
    /// biking speed in m/s
    pub bike_speed: f64,
}

impl Default for RiderProfile {
    fn default() -> Self {
        RiderProfile {
            weight_kg: 68.0,
            walk_speed: 1.4,
            bike_speed: 4.1,
        }
    }
}
