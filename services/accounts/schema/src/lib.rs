//! sea-orm entities for the accounts database.
//!
//! One module per table. Column defaults and constraints live in the
//! `rideway-accounts-migration` crate; these models mirror them.

pub mod driver_profiles;
pub mod users;
pub mod vehicles;
