//! physiological formulas converting speed, body weight, and duration into
//! calories burned. pure functions, no state.

use uom::si::f64::Velocity;
use uom::si::velocity::{kilometer_per_hour, meter_per_second};

/// walking calorie burn polynomial coefficients (speed in km/h)
const WALK_CUBIC: f64 = 0.0215;
const WALK_QUADRATIC: f64 = 0.1765;
const WALK_LINEAR: f64 = 0.8710;

/// bicycle power model constants
const GRAVITY: f64 = 9.8;
const K1: f64 = 0.0053; // frictional losses
const K2: f64 = 0.185; // aerodynamic drag
const GRADE: f64 = 1.0;
const WATTS_TO_CALS_PER_SECOND: f64 = 0.2388;

const SECONDS_PER_HOUR: f64 = 3600.0;
const CALORIES_PER_POUND: f64 = 3500.0;

/// calories burned walking at `speed` m/s for `hours`.
///
/// `CB = (0.0215 v³ − 0.1765 v² + 0.8710 v) × kg × h` with v in km/h.
pub fn walking_calories(speed: f64, weight_kg: f64, hours: f64) -> f64 {
    let kph = Velocity::new::<meter_per_second>(speed).get::<kilometer_per_hour>();
    let kph2 = kph * kph;
    let kph3 = kph2 * kph;
    (WALK_CUBIC * kph3 - WALK_QUADRATIC * kph2 + WALK_LINEAR * kph) * weight_kg * hours
}

/// calories burned biking at `speed` m/s for `hours`, from the rider power
/// required against friction, grade, and drag.
pub fn biking_calories(speed: f64, weight_kg: f64, hours: f64) -> f64 {
    let seconds = hours * SECONDS_PER_HOUR;
    let watts = GRAVITY * weight_kg * speed * (K1 + GRADE) + K2 * speed.powi(3);
    watts * WATTS_TO_CALS_PER_SECOND * seconds
}

/// the weight-loss equivalent of a calorie total.
pub fn calories_to_pounds(calories: f64) -> f64 {
    calories / CALORIES_PER_POUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_calories_at_typical_pace() {
        // 1.4 m/s (5.04 km/h), 68 kg, one hour
        let calories = walking_calories(1.4, 68.0, 1.0);
        assert!((calories - 180.8103).abs() < 1e-3);
    }

    #[test]
    fn test_walking_calories_zero_speed() {
        assert_eq!(walking_calories(0.0, 68.0, 1.0), 0.0);
    }

    #[test]
    fn test_biking_calories_at_typical_pace() {
        // 4.1 m/s, 68 kg, half an hour
        let calories = biking_calories(4.1, 68.0, 0.5);
        assert!((calories - 1_186_131.13).abs() < 1.0);
    }

    #[test]
    fn test_calories_scale_with_duration() {
        let one_hour = walking_calories(1.4, 68.0, 1.0);
        let two_hours = walking_calories(1.4, 68.0, 2.0);
        assert!((two_hours - 2.0 * one_hour).abs() < 1e-9);
    }

    #[test]
    fn test_calories_to_pounds() {
        assert_eq!(calories_to_pounds(3500.0), 1.0);
        assert_eq!(calories_to_pounds(0.0), 0.0);
    }
}
