use std::str::FromStr;

use strum::Display;

use crate::CalculationError;

/// Highest rep count the Epley and Lombardi formulas are defined for.
pub const MAX_REPS: u32 = 30;

/// Rep count at which the Brzycki denominator reaches zero.
pub const BRZYCKI_SINGULARITY: u32 = 37;

#[derive(serde::Serialize, serde::Deserialize, Display, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Formula {
    #[default]
    Epley,
    Brzycki,
    Lombardi,
}

impl Formula {
    pub const ALL: [Formula; 3] = [Formula::Epley, Formula::Brzycki, Formula::Lombardi];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Formula::Epley => "Epley",
            Formula::Brzycki => "Brzycki",
            Formula::Lombardi => "Lombardi",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Formula::Epley => "weight × (1 + reps / 30)",
            Formula::Brzycki => "weight × 36 / (37 − reps)",
            Formula::Lombardi => "weight × reps^0.10",
        }
    }

    pub fn calculate(self, weight: f64, reps: u32) -> Result<f64, CalculationError> {
        match self {
            Formula::Epley => epley(weight, reps),
            Formula::Brzycki => brzycki(weight, reps),
            Formula::Lombardi => lombardi(weight, reps),
        }
    }
}

impl FromStr for Formula {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "epley" => Ok(Formula::Epley),
            "brzycki" => Ok(Formula::Brzycki),
            "lombardi" => Ok(Formula::Lombardi),
            _ => Err(CalculationError::UnknownFormula(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Formula {
    type Error = CalculationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Estimate the one-rep max with the given formula.
pub fn one_rep_max(weight: f64, reps: u32, formula: Formula) -> Result<f64, CalculationError> {
    formula.calculate(weight, reps)
}

pub fn epley(weight: f64, reps: u32) -> Result<f64, CalculationError> {
    check_weight_and_reps(weight, reps)?;
    if reps > MAX_REPS {
        return Err(CalculationError::TooManyReps);
    }

    if reps == 1 {
        return Ok(weight);
    }

    Ok(weight * (1.0 + f64::from(reps) / 30.0))
}

pub fn brzycki(weight: f64, reps: u32) -> Result<f64, CalculationError> {
    check_weight_and_reps(weight, reps)?;
    if reps >= BRZYCKI_SINGULARITY {
        return Err(CalculationError::BrzyckiSingularity);
    }

    if reps == 1 {
        return Ok(weight);
    }

    Ok(weight * (36.0 / (f64::from(BRZYCKI_SINGULARITY) - f64::from(reps))))
}

pub fn lombardi(weight: f64, reps: u32) -> Result<f64, CalculationError> {
    check_weight_and_reps(weight, reps)?;
    if reps > MAX_REPS {
        return Err(CalculationError::TooManyReps);
    }

    if reps == 1 {
        return Ok(weight);
    }

    Ok(weight * f64::from(reps).powf(0.10))
}

pub(crate) fn check_weight_and_reps(weight: f64, reps: u32) -> Result<(), CalculationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(CalculationError::NonPositiveWeight);
    }

    if reps == 0 {
        return Err(CalculationError::NonPositiveReps);
    }

    Ok(())
}
