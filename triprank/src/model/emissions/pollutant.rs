use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Co2,
    NOx,
    Pm10,
}

impl Pollutant {
    pub const ALL: [Pollutant; 3] = [Pollutant::Co2, Pollutant::NOx, Pollutant::Pm10];
}

impl Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Pollutant::Co2 => "co2",
            Pollutant::NOx => "nox",
            Pollutant::Pm10 => "pm10",
        };
        write!(f, "{}", s)
    }
}
