use std::fmt;

use derive_more::{Display, Into};

use crate::{WeightUnit, formula::MAX_REPS};

/// Raw value of a form field, as typed by a user or sent by a client.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn to_number(&self) -> Result<Option<f64>, ()> {
        let number = match self {
            FieldValue::Number(number) => *number,
            FieldValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().map_err(|_| ())?
            }
        };

        if number.is_finite() {
            Ok(Some(number))
        } else {
            Err(())
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64, unit: WeightUnit) -> Result<Self, WeightError> {
        if value.is_nan() {
            return Err(WeightError::ParseError);
        }

        if value <= 0.0 {
            return Err(WeightError::NonPositive);
        }

        if value > unit.max_weight() {
            return Err(WeightError::TooHeavy(unit));
        }

        Ok(Self(value))
    }

    pub fn parse(value: &FieldValue, unit: WeightUnit) -> Result<Self, WeightError> {
        match value.to_number() {
            Ok(Some(number)) => Weight::new(number, unit),
            Ok(None) => Err(WeightError::Missing),
            Err(()) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum WeightError {
    #[error("Weight is required")]
    Missing,
    #[error("Weight must be a number")]
    ParseError,
    #[error("Weight must be greater than 0")]
    NonPositive,
    #[error("Weight must be {} {} or less", .0.max_weight(), .0)]
    TooHeavy(WeightUnit),
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value < 1 {
            return Err(RepsError::TooFew);
        }

        if value > MAX_REPS {
            return Err(RepsError::TooMany);
        }

        Ok(Self(value))
    }

    pub fn parse(value: &FieldValue) -> Result<Self, RepsError> {
        let number = match value.to_number() {
            Ok(Some(number)) => number,
            Ok(None) => return Err(RepsError::Missing),
            Err(()) => return Err(RepsError::ParseError),
        };

        if number.fract() != 0.0 {
            return Err(RepsError::NotWholeNumber);
        }

        if number < 1.0 {
            return Err(RepsError::TooFew);
        }

        if number > f64::from(MAX_REPS) {
            return Err(RepsError::TooMany);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Reps::new(number as u32)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RepsError {
    #[error("Reps are required")]
    Missing,
    #[error("Reps must be a number")]
    ParseError,
    #[error("Reps must be a whole number")]
    NotWholeNumber,
    #[error("Reps must be at least 1")]
    TooFew,
    #[error("Reps must be 30 or less")]
    TooMany,
}

/// Outcome of validating a single form field.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T, E: fmt::Display> From<Result<T, E>> for FieldValidation {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(_) => FieldValidation {
                is_valid: true,
                error: None,
            },
            Err(err) => FieldValidation {
                is_valid: false,
                error: Some(err.to_string()),
            },
        }
    }
}

#[must_use]
pub fn validate_one_rep_max_weight(
    value: impl Into<FieldValue>,
    unit: WeightUnit,
) -> FieldValidation {
    Weight::parse(&value.into(), unit).into()
}

#[must_use]
pub fn validate_reps(value: impl Into<FieldValue>) -> FieldValidation {
    Reps::parse(&value.into()).into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.1, WeightUnit::Kg, Ok(Weight(0.1)))]
    #[case(500.0, WeightUnit::Kg, Ok(Weight(500.0)))]
    #[case(500.1, WeightUnit::Kg, Err(WeightError::TooHeavy(WeightUnit::Kg)))]
    #[case(1100.0, WeightUnit::Lb, Ok(Weight(1100.0)))]
    #[case(1101.0, WeightUnit::Lb, Err(WeightError::TooHeavy(WeightUnit::Lb)))]
    #[case(0.0, WeightUnit::Kg, Err(WeightError::NonPositive))]
    #[case(-20.0, WeightUnit::Lb, Err(WeightError::NonPositive))]
    fn test_weight_new(
        #[case] input: f64,
        #[case] unit: WeightUnit,
        #[case] expected: Result<Weight, WeightError>,
    ) {
        assert_eq!(Weight::new(input, unit), expected);
    }

    #[rstest]
    #[case("100", Ok(Weight(100.0)))]
    #[case(" 82.5 ", Ok(Weight(82.5)))]
    #[case("4.", Ok(Weight(4.0)))]
    #[case("", Err(WeightError::Missing))]
    #[case("   ", Err(WeightError::Missing))]
    #[case("abc", Err(WeightError::ParseError))]
    #[case("inf", Err(WeightError::ParseError))]
    #[case("NaN", Err(WeightError::ParseError))]
    #[case("-5", Err(WeightError::NonPositive))]
    fn test_weight_parse(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::parse(&input.into(), WeightUnit::Kg), expected);
    }

    #[rstest]
    #[case(1, Ok(Reps(1)))]
    #[case(30, Ok(Reps(30)))]
    #[case(0, Err(RepsError::TooFew))]
    #[case(31, Err(RepsError::TooMany))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case::integer(FieldValue::Number(5.0), Ok(Reps(5)))]
    #[case::text("12".into(), Ok(Reps(12)))]
    #[case::decimal(FieldValue::Number(5.5), Err(RepsError::NotWholeNumber))]
    #[case::decimal_text("5.5".into(), Err(RepsError::NotWholeNumber))]
    #[case::zero(FieldValue::Number(0.0), Err(RepsError::TooFew))]
    #[case::negative("-3".into(), Err(RepsError::TooFew))]
    #[case::too_many(FieldValue::Number(31.0), Err(RepsError::TooMany))]
    #[case::empty("".into(), Err(RepsError::Missing))]
    #[case::text_not_a_number("five".into(), Err(RepsError::ParseError))]
    #[case::infinite(FieldValue::Number(f64::INFINITY), Err(RepsError::ParseError))]
    fn test_reps_parse(#[case] input: FieldValue, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::parse(&input), expected);
    }

    #[rstest]
    #[case(FieldValue::Number(5.0), true, None)]
    #[case(FieldValue::Number(30.0), true, None)]
    #[case(FieldValue::Number(5.5), false, Some("Reps must be a whole number"))]
    #[case(FieldValue::Number(0.0), false, Some("Reps must be at least 1"))]
    #[case(FieldValue::Number(31.0), false, Some("Reps must be 30 or less"))]
    #[case("abc".into(), false, Some("Reps must be a number"))]
    fn test_validate_reps(
        #[case] input: FieldValue,
        #[case] is_valid: bool,
        #[case] error: Option<&str>,
    ) {
        assert_eq!(
            validate_reps(input),
            FieldValidation {
                is_valid,
                error: error.map(str::to_string),
            }
        );
    }

    #[rstest]
    #[case(FieldValue::Number(500.0), WeightUnit::Kg, true, None)]
    #[case(
        FieldValue::Number(501.0),
        WeightUnit::Kg,
        false,
        Some("Weight must be 500 kg or less")
    )]
    #[case(FieldValue::Number(1100.0), WeightUnit::Lb, true, None)]
    #[case(
        FieldValue::Number(1101.0),
        WeightUnit::Lb,
        false,
        Some("Weight must be 1100 lb or less")
    )]
    #[case(
        FieldValue::Number(0.0),
        WeightUnit::Kg,
        false,
        Some("Weight must be greater than 0")
    )]
    #[case("".into(), WeightUnit::Kg, false, Some("Weight is required"))]
    #[case("heavy".into(), WeightUnit::Lb, false, Some("Weight must be a number"))]
    fn test_validate_one_rep_max_weight(
        #[case] input: FieldValue,
        #[case] unit: WeightUnit,
        #[case] is_valid: bool,
        #[case] error: Option<&str>,
    ) {
        assert_eq!(
            validate_one_rep_max_weight(input, unit),
            FieldValidation {
                is_valid,
                error: error.map(str::to_string),
            }
        );
    }

    #[test]
    fn test_validators_accept_plain_values() {
        assert!(validate_reps(5).is_valid);
        assert!(!validate_reps(5.5).is_valid);
        assert!(validate_reps("8").is_valid);
        assert!(validate_reps(String::from("8")).is_valid);
        assert!(!validate_one_rep_max_weight(501, WeightUnit::Kg).is_valid);
        assert!(!validate_one_rep_max_weight(1101, WeightUnit::Lb).is_valid);
        assert!(validate_one_rep_max_weight(225.5, WeightUnit::Lb).is_valid);
    }

    #[test]
    fn test_field_value_deserialize() {
        assert_eq!(
            serde_json::from_str::<FieldValue>("82.5").unwrap(),
            FieldValue::Number(82.5)
        );
        assert_eq!(
            serde_json::from_str::<FieldValue>("\"82.5\"").unwrap(),
            FieldValue::Text("82.5".to_string())
        );
    }

    #[test]
    fn test_field_validation_serialize() {
        assert_eq!(
            serde_json::to_string(&validate_reps(5.5)).unwrap(),
            r#"{"isValid":false,"error":"Reps must be a whole number"}"#
        );
        assert_eq!(
            serde_json::to_string(&validate_reps(5)).unwrap(),
            r#"{"isValid":true}"#
        );
    }
}
