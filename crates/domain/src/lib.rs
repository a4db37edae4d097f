#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod aggregate;
mod calculation;
mod chart;
mod error;
pub mod formula;
mod unit;
mod validation;
mod zones;

pub use aggregate::*;
pub use calculation::*;
pub use chart::*;
pub use error::*;
pub use formula::{Formula, brzycki, epley, lombardi, one_rep_max};
pub use unit::*;
pub use validation::*;
pub use zones::{
    TRAINING_ZONE_BANDS, TrainingZone, TrainingZoneBand, TrainingZoneKind, training_zones,
};

/// Round half away from zero to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
