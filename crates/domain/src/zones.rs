use strum::Display;

use crate::{CalculationError, round_to_tenth};

#[derive(serde::Serialize, serde::Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrainingZoneKind {
    Strength,
    Hypertrophy,
    Endurance,
}

pub struct TrainingZoneBand {
    pub zone: TrainingZoneKind,
    pub name: &'static str,
    pub description: &'static str,
    pub min_percentage: u8,
    pub max_percentage: u8,
    pub rep_range: &'static str,
}

pub static TRAINING_ZONE_BANDS: [TrainingZoneBand; 3] = [
    TrainingZoneBand {
        zone: TrainingZoneKind::Strength,
        name: "Strength",
        description: "Heavy loads for maximal strength and neural adaptation",
        min_percentage: 80,
        max_percentage: 90,
        rep_range: "3-6",
    },
    TrainingZoneBand {
        zone: TrainingZoneKind::Hypertrophy,
        name: "Hypertrophy",
        description: "Moderate loads for muscle growth",
        min_percentage: 65,
        max_percentage: 75,
        rep_range: "8-12",
    },
    TrainingZoneBand {
        zone: TrainingZoneKind::Endurance,
        name: "Endurance",
        description: "Light loads for muscular endurance",
        min_percentage: 50,
        max_percentage: 65,
        rep_range: "12-20",
    },
];

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingZone {
    pub zone: TrainingZoneKind,
    pub name: String,
    pub description: String,
    pub min_percentage: u8,
    pub max_percentage: u8,
    pub min_weight: f64,
    pub max_weight: f64,
    pub rep_range: String,
}

pub fn training_zones(one_rep_max: f64) -> Result<Vec<TrainingZone>, CalculationError> {
    check_one_rep_max(one_rep_max)?;

    Ok(TRAINING_ZONE_BANDS
        .iter()
        .map(|band| TrainingZone {
            zone: band.zone,
            name: band.name.to_string(),
            description: band.description.to_string(),
            min_percentage: band.min_percentage,
            max_percentage: band.max_percentage,
            min_weight: round_to_tenth(one_rep_max * f64::from(band.min_percentage) / 100.0),
            max_weight: round_to_tenth(one_rep_max * f64::from(band.max_percentage) / 100.0),
            rep_range: band.rep_range.to_string(),
        })
        .collect())
}

pub(crate) fn check_one_rep_max(one_rep_max: f64) -> Result<(), CalculationError> {
    if !one_rep_max.is_finite() || one_rep_max <= 0.0 {
        return Err(CalculationError::NonPositiveOneRepMax);
    }

    Ok(())
}
