use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a travel mode tag attached to an itinerary option. `CarPark` marks
/// drive-to-transit options, `BicycleRent` bike-share legs. tags this engine
/// does not score deserialize as `Other` rather than failing the whole
/// option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Walk,
    Bicycle,
    BicycleRent,
    Car,
    CarPark,
    Bus,
    Tram,
    Rail,
    #[serde(other)]
    Other,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Walk => "walk",
            Mode::Bicycle => "bicycle",
            Mode::BicycleRent => "bicycle_rent",
            Mode::Car => "car",
            Mode::CarPark => "car_park",
            Mode::Bus => "bus",
            Mode::Tram => "tram",
            Mode::Rail => "rail",
            Mode::Other => "other",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_known_tags() {
        let modes: Vec<Mode> =
            serde_json::from_str(r#"["walk", "bicycle_rent", "car_park", "rail"]"#)
                .expect("mode tags should deserialize");
        assert_eq!(
            modes,
            vec![Mode::Walk, Mode::BicycleRent, Mode::CarPark, Mode::Rail]
        );
    }

    #[test]
    fn test_unknown_tag_becomes_other() {
        let modes: Vec<Mode> =
            serde_json::from_str(r#"["walk", "ferry"]"#).expect("unknown tags should not fail");
        assert_eq!(modes, vec![Mode::Walk, Mode::Other]);
    }
}
