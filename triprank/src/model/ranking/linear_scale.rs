/// a linear map from a metric's observed domain onto a fixed output range.
/// a collapsed domain (every option identical) maps everything to the low
/// end of the range rather than dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        LinearScale { domain, range }
    }

    /// where the value sits in the domain, as a fraction in [0, 1].
    pub fn fraction(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d1 == d0 {
            0.0
        } else {
            (value - d0) / (d1 - d0)
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + self.fraction(value) * (r1 - r0)
    }
}
