//! aggregation of per-submode ride time from raw transit legs. the coach
//! subnetworks are distinguished purely by agency name: `sub` and `ted` are
//! coaches, every other bus agency belongs to the primary bus network.

use super::{Mode, RouteOption};

/// accumulated ride seconds per transit submode for one option.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubmodeTimes {
    pub bus: f64,
    pub sub: f64,
    pub ted: f64,
    pub tram: f64,
    pub train: f64,
}

/// splits an option's transit ride time across submodes by route mode and
/// agency name. legs with no reported route are skipped.
pub fn aggregate_submode_times(option: &RouteOption) -> SubmodeTimes {
    let mut times = SubmodeTimes::default();

    if option.has_mode(Mode::Bus) {
        for leg in &option.transit {
            if leg.route_mode().is_some_and(|m| m.eq_ignore_ascii_case("bus")) {
                let ride = leg.ride_stats.avg;
                match leg.agency_name().map(str::to_lowercase).as_deref() {
                    Some("sub") => times.sub += ride,
                    Some("ted") => times.ted += ride,
                    _ => times.bus += ride,
                }
            }
        }
    }

    if option.has_mode(Mode::Tram) {
        for leg in &option.transit {
            if leg
                .route_mode()
                .is_some_and(|m| m.eq_ignore_ascii_case("tram"))
            {
                times.tram += leg.ride_stats.avg;
            }
        }
    }

    if option.has_mode(Mode::Rail) {
        for leg in &option.transit {
            if leg
                .route_mode()
                .is_some_and(|m| m.eq_ignore_ascii_case("rail"))
            {
                times.train += leg.ride_stats.avg;
            }
        }
    }

    times
}
