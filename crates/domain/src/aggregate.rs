use log::debug;

use crate::{CalculationError, Formula, formula::check_weight_and_reps, round_to_tenth};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormulaResult {
    pub formula: Formula,
    pub name: String,
    pub one_rep_max: f64,
}

/// Estimate the one-rep max with every formula that is defined for `reps`.
///
/// Formulas whose rep range does not cover `reps` are left out of the result.
/// Invalid weights or reps fail before any formula is tried.
pub fn all_formulas(weight: f64, reps: u32) -> Result<Vec<FormulaResult>, CalculationError> {
    check_weight_and_reps(weight, reps)?;

    let mut results = Vec::with_capacity(Formula::ALL.len());

    for formula in Formula::ALL {
        match formula.calculate(weight, reps) {
            Ok(one_rep_max) => results.push(FormulaResult {
                formula,
                name: formula.name().to_string(),
                one_rep_max: round_to_tenth(one_rep_max),
            }),
            Err(err) if err.is_domain_violation() => {
                debug!("skipping {formula} formula for {reps} reps: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(results)
}

/// Average of all applicable formulas, rounded to one decimal.
pub fn average_one_rep_max(weight: f64, reps: u32) -> Result<f64, CalculationError> {
    let results = all_formulas(weight, reps)?;

    if results.is_empty() {
        return Err(CalculationError::NoResult);
    }

    #[allow(clippy::cast_precision_loss)]
    let average = results.iter().map(|r| r.one_rep_max).sum::<f64>() / results.len() as f64;

    Ok(round_to_tenth(average))
}
