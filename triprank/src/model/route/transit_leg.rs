use serde::{Deserialize, Serialize};

/// a non-transit leg surrounding transit use (access or egress).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessLeg {
    pub mode: String,
    pub time: f64,
}

/// one transit segment of an itinerary. the routing service reports the
/// candidate routes for the segment; the first entry carries the mode and
/// agency used for submode classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitLeg {
    pub routes: Vec<TransitRoute>,
    pub ride_stats: LegStats,
    pub wait_stats: LegStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitRoute {
    pub id: Option<String>,
    pub mode: String,
    pub agency_name: String,
}

/// averaged seconds observed for a leg across the departure window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegStats {
    pub avg: f64,
}

impl TransitLeg {
    /// the mode tag of the route serving this leg, when the routing service
    /// supplied one.
    pub fn route_mode(&self) -> Option<&str> {
        self.routes.first().map(|r| r.mode.as_str())
    }

    pub fn agency_name(&self) -> Option<&str> {
        self.routes.first().map(|r| r.agency_name.as_str())
    }
}
