//! ATM distance ranking and search filters.
//!
//! Coordinates are not money: this module works in `f64` and is exempt
//! from the workspace float lints.
#![allow(
    clippy::float_arithmetic,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::suboptimal_flops
)]

pub mod service;
pub mod types;


#[cfg(test)]
mod rank_props;

pub use service::GeoService;
pub use types::{AtmFilter, AtmLocation, AtmNetwork, AtmService, Coordinates, RankedAtm};
