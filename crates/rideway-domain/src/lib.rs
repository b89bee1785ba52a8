//! Domain types shared across all Rideway services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod driver;
pub mod pagination;
pub mod user;
