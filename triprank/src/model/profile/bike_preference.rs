//! normalization of the three bike comfort weightings (safety, slope, time)
//! into integer percentages for the routing request.

/// integer percentage split of the bike comfort weightings. always sums to
/// exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BikePreference {
    pub safe: u32,
    pub slope: u32,
    pub time: u32,
}

/// even three-way split used when every weighting is zero
const ZERO_SPLIT: BikePreference = BikePreference {
    safe: 33,
    slope: 33,
    time: 34,
};

/// normalizes raw weightings into integer percentages summing to 100.
/// negative inputs are clamped to zero; an all-zero total takes a fixed
/// 33/33/34 split rather than dividing by zero. flooring each share can
/// leave the sum a few points off 100, so the remainder is settled one point
/// at a time, preferring safety, then slope, then time.
pub fn normalize_percentages(safe: f64, slope: f64, time: f64) -> BikePreference {
    let safe = safe.max(0.0);
    let slope = slope.max(0.0);
    let time = time.max(0.0);

    let total = safe + slope + time;
    if total == 0.0 {
        return ZERO_SPLIT;
    }

    let mut result = BikePreference {
        safe: (100.0 * safe / total).floor() as u32,
        slope: (100.0 * slope / total).floor() as u32,
        time: (100.0 * time / total).floor() as u32,
    };

    while result.safe + result.slope + result.time != 100 {
        let sum = result.safe + result.slope + result.time;
        if sum > 100 {
            if result.safe > 0 {
                result.safe -= 1;
            } else if result.slope > 0 {
                result.slope -= 1;
            } else {
                result.time -= 1;
            }
        } else {
            if result.safe < 100 {
                result.safe += 1;
            } else if result.slope < 100 {
                result.slope += 1;
            } else {
                result.time += 1;
            }
        }
    }

    result
}
