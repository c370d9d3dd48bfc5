use super::emissions::EmissionModel;
use super::profile::RiderProfile;
use super::rates::RateTable;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// the commute window the routing request covered, used to turn trip counts
/// into a headway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Default for PlanWindow {
    fn default() -> Self {
        PlanWindow {
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }
}

impl PlanWindow {
    pub fn hours(&self) -> f64 {
        (self.end_time - self.start_time).num_seconds() as f64 / 3600.0
    }
}

/// everything a scoring pass reads besides the options themselves. the
/// context owns the shared mutable rate state, so updates are atomic with
/// respect to scoring by construction: mutation needs `&mut`, scoring
/// borrows `&`.
#[derive(Debug, Clone, Default)]
pub struct ScoringContext {
    pub rates: RateTable,
    pub emissions: EmissionModel,
    pub profile: RiderProfile,
    pub plan_window: PlanWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_hours() {
        assert_eq!(PlanWindow::default().hours(), 2.0);
    }
}
