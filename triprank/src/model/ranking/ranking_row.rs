use super::color_scale::WHITE;
use super::Rgb;

/// the flattened quantities one option exposes to the ranking pass, plus
/// the rank and display colors assigned by it. rebuilt from scratch on
/// every pass; never persisted.
#[derive(Debug, Clone)]
pub struct RankingRow {
    /// position of the option in the original (pre-sort) list
    pub index: usize,
    pub time: f64,
    pub cost: f64,
    pub walk_distance: f64,
    pub calories: f64,
    /// per-trip weight-loss equivalent, in thousandths of the weight unit
    pub weight_lost: f64,
    /// minutes usable for other things while riding transit
    pub productive_time: f64,
    /// minutes saved yearly against the drive baseline
    pub time_savings: f64,
    pub emissions: f64,
    pub emissions_nox: f64,
    pub emissions_pm10: f64,
    pub score: f64,
    pub primary_rank: f64,
    pub primary_color: Rgb,
    pub secondary_rank: f64,
    pub secondary_color: Rgb,
    pub rank: f64,
}

impl RankingRow {
    /// an empty row awaiting metric values and rank assignment.
    pub fn new(index: usize) -> RankingRow {
        RankingRow {
            index,
            time: 0.0,
            cost: 0.0,
            walk_distance: 0.0,
            calories: 0.0,
            weight_lost: 0.0,
            productive_time: 0.0,
            time_savings: 0.0,
            emissions: 0.0,
            emissions_nox: 0.0,
            emissions_pm10: 0.0,
            score: 0.0,
            primary_rank: 0.0,
            primary_color: WHITE,
            secondary_rank: 0.0,
            secondary_color: WHITE,
            rank: 0.0,
        }
    }
}
