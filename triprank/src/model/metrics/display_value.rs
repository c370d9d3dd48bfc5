//! display-ready value types for the derived metrics. formatting rules are
//! part of the engine contract: the rendering layer prints these verbatim.

use std::fmt::Display;

/// a total formatted by magnitude: large values compress to a truncated
/// one-decimal "k" form, mid-range values to a whole number, small monetary
/// values keep two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompactNumber {
    /// thousands, already divided and truncated to one decimal
    Thousands(f64),
    Whole(i64),
    Exact(f64),
}

/// truncating single-decimal rounding (toward zero, not nearest)
fn truncate_tenths(n: f64) -> f64 {
    (n * 10.0).trunc() / 10.0
}

impl CompactNumber {
    /// monetary formatting: "k" above 1000, whole number above 100, two
    /// decimals otherwise.
    pub fn cost(total: f64) -> CompactNumber {
        if total > 1000.0 {
            CompactNumber::Thousands(truncate_tenths(total / 1000.0))
        } else if total > 100.0 {
            CompactNumber::Whole(total as i64)
        } else {
            CompactNumber::Exact(total)
        }
    }

    /// count formatting: "k" above 1000, whole number otherwise.
    pub fn count(total: f64) -> CompactNumber {
        if total > 1000.0 {
            CompactNumber::Thousands(truncate_tenths(total / 1000.0))
        } else {
            CompactNumber::Whole(total as i64)
        }
    }
}

impl Display for CompactNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompactNumber::Thousands(v) => write!(f, "{}k", v),
            CompactNumber::Whole(v) => write!(f, "{}", v),
            CompactNumber::Exact(v) => write!(f, "{:.2}", v),
        }
    }
}

/// walk/bike leg duration at display granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseMinutes {
    LessThanOne,
    Minutes(i64),
}

impl CoarseMinutes {
    pub fn from_seconds(seconds: f64) -> CoarseMinutes {
        if seconds < 60.0 {
            CoarseMinutes::LessThanOne
        } else {
            CoarseMinutes::Minutes((seconds / 60.0) as i64)
        }
    }
}

impl Display for CoarseMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoarseMinutes::LessThanOne => write!(f, "< 1"),
            CoarseMinutes::Minutes(m) => write!(f, "{}", m),
        }
    }
}

/// yearly time saved against the drive baseline, coarsened to whole minutes
/// below two hours and whole hours above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSavings {
    Minutes(i64),
    Hours(i64),
}

const HOURS_CUTOFF_MINUTES: f64 = 120.0;

impl TimeSavings {
    pub fn from_seconds(seconds: f64) -> TimeSavings {
        let minutes = seconds / 60.0;
        if minutes > HOURS_CUTOFF_MINUTES {
            TimeSavings::Hours((minutes / 60.0) as i64)
        } else {
            TimeSavings::Minutes(minutes as i64)
        }
    }

    /// the value as minutes, for use as a ranking quantity.
    pub fn as_minutes(&self) -> f64 {
        match self {
            TimeSavings::Minutes(m) => *m as f64,
            TimeSavings::Hours(h) => (*h * 60) as f64,
        }
    }
}

impl Display for TimeSavings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSavings::Minutes(m) => write!(f, "{} min", m),
            TimeSavings::Hours(h) => write!(f, "{} hrs", h),
        }
    }
}
