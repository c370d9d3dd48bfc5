mod fare_schedule;
mod rate_selector;
mod rate_table;
mod rate_table_config;
mod trip_multiplier;

pub use fare_schedule::FareSchedule;
pub use rate_selector::RateSelector;
pub use rate_table::{RateSettings, RateTable};
pub use rate_table_config::{FareScheduleConfig, RateTableConfig};
pub use trip_multiplier::TripFrequency;
