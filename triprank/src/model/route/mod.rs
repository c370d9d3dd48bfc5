pub mod ingest_ops;
mod mode;
mod route_option;
mod transit_leg;

pub use ingest_ops::SubmodeTimes;
pub use mode::Mode;
pub use route_option::RouteOption;
pub use transit_leg::{AccessLeg, LegStats, TransitLeg, TransitRoute};
