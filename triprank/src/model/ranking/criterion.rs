use super::RankingRow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the closed set of rankable criteria. each dispatches to a pure extractor
/// over a ranking row; metrics that are better when larger (calories,
/// savings) extract negated, so a lower extractor value is uniformly
/// "better" and the engine only ever minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum RankingCriterion {
    TravelTime,
    TotalCost,
    WalkDistance,
    Calories,
    ProductiveTime,
    WeightLost,
    TimeSavings,
    Emissions,
    None,
}

impl RankingCriterion {
    pub fn extract(&self, row: &RankingRow) -> f64 {
        match self {
            RankingCriterion::TravelTime => row.time,
            RankingCriterion::TotalCost => row.cost,
            RankingCriterion::WalkDistance => row.walk_distance,
            RankingCriterion::Calories => -row.calories,
            RankingCriterion::ProductiveTime => -row.productive_time,
            RankingCriterion::WeightLost => -row.weight_lost,
            RankingCriterion::TimeSavings => -row.time_savings,
            RankingCriterion::Emissions => -row.emissions,
            RankingCriterion::None => 0.0,
        }
    }
}

impl Display for RankingCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RankingCriterion::TravelTime => "travel-time",
            RankingCriterion::TotalCost => "total-cost",
            RankingCriterion::WalkDistance => "walk-distance",
            RankingCriterion::Calories => "calories",
            RankingCriterion::ProductiveTime => "productive-time",
            RankingCriterion::WeightLost => "weight-lost",
            RankingCriterion::TimeSavings => "time-savings",
            RankingCriterion::Emissions => "emissions",
            RankingCriterion::None => "none",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_criteria_negate() {
        let row = RankingRow {
            calories: 200.0,
            emissions: 40.0,
            time: 1800.0,
            ..RankingRow::new(0)
        };
        assert_eq!(RankingCriterion::Calories.extract(&row), -200.0);
        assert_eq!(RankingCriterion::Emissions.extract(&row), -40.0);
        assert_eq!(RankingCriterion::TravelTime.extract(&row), 1800.0);
        assert_eq!(RankingCriterion::None.extract(&row), 0.0);
    }
}
