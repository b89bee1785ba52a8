pub mod driver_profile;
pub mod user;
pub mod vehicle;
