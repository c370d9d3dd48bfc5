use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the car's fuel type, which selects the row of the car emission factor
/// tables. held on the emission model and switchable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Diesel,
    Gasoline,
    Hybrid,
    Electric,
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FuelType::Diesel => "diesel",
            FuelType::Gasoline => "gasoline",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        };
        write!(f, "{}", s)
    }
}
