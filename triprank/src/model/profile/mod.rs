pub mod bike_preference;
mod rider_profile;

pub use rider_profile::RiderProfile;
