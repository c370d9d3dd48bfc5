/// the all-driving alternative every option is compared against: its yearly
/// cost (driving plus parking), its CO2 mass, and its expected trip time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveBaseline {
    pub cost: f64,
    pub emissions: f64,
    pub time: f64,
}
