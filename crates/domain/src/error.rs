use crate::{RepsError, WeightError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Form values are required")]
    MissingForm,
    #[error("Weight must be greater than 0")]
    NonPositiveWeight,
    #[error("Reps must be greater than 0")]
    NonPositiveReps,
    #[error("Reps must be 30 or less")]
    TooManyReps,
    #[error("Brzycki formula is invalid for 37 or more reps")]
    BrzyckiSingularity,
    #[error("Unknown formula: {0}")]
    UnknownFormula(String),
    #[error("Unable to calculate 1RM with given inputs")]
    NoResult,
    #[error("One-rep max must be greater than 0")]
    NonPositiveOneRepMax,
    #[error("Percentage must be greater than 0 and at most 100")]
    PercentageOutOfRange,
    #[error("Percentage is too low to estimate reps")]
    RepsNotRepresentable,
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Reps(#[from] RepsError),
}

impl CalculationError {
    /// Whether the error only rules out a single formula for the given reps.
    #[must_use]
    pub fn is_domain_violation(&self) -> bool {
        matches!(
            self,
            CalculationError::TooManyReps | CalculationError::BrzyckiSingularity
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CalculationError::TooManyReps, true)]
    #[case(CalculationError::BrzyckiSingularity, true)]
    #[case(CalculationError::NonPositiveWeight, false)]
    #[case(CalculationError::NonPositiveReps, false)]
    #[case(CalculationError::UnknownFormula("foo".to_string()), false)]
    #[case(CalculationError::NoResult, false)]
    fn test_calculation_error_is_domain_violation(
        #[case] error: CalculationError,
        #[case] expected: bool,
    ) {
        assert_eq!(error.is_domain_violation(), expected);
    }

    #[rstest]
    #[case(CalculationError::MissingForm, "Form values are required")]
    #[case(CalculationError::UnknownFormula("foo".to_string()), "Unknown formula: foo")]
    #[case(
        CalculationError::Reps(RepsError::NotWholeNumber),
        "Reps must be a whole number"
    )]
    #[case(
        CalculationError::Weight(WeightError::NonPositive),
        "Weight must be greater than 0"
    )]
    fn test_calculation_error_display(#[case] error: CalculationError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_calculation_error_from_reps_error() {
        assert!(matches!(
            CalculationError::from(RepsError::TooMany),
            CalculationError::Reps(RepsError::TooMany)
        ));
    }
}
