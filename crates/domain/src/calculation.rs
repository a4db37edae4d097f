use log::debug;

use crate::{
    CalculationError, FieldValue, Formula, FormulaResult, PercentageChartEntry, Reps,
    TrainingZone, Weight, WeightUnit, all_formulas, one_rep_max, percentage_chart,
    round_to_tenth, training_zones,
};

/// Values submitted through the one-rep max form.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxForm {
    pub weight: FieldValue,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    pub reps: FieldValue,
    pub formula: Formula,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxResult {
    pub one_rep_max: f64,
    pub all_formulas: Vec<FormulaResult>,
    pub training_zones: Vec<TrainingZone>,
    pub percentage_chart: Vec<PercentageChartEntry>,
    pub selected_formula: Formula,
    pub weight_unit: WeightUnit,
}

/// Validate a submitted form and compute everything shown for it.
///
/// Training zones and the percentage chart are derived from the rounded
/// one-rep max of the selected formula. Either the complete result is
/// returned or the first validation or calculation error.
pub fn process_one_rep_max_calculation(
    form: Option<&OneRepMaxForm>,
) -> Result<OneRepMaxResult, CalculationError> {
    let form = form.ok_or(CalculationError::MissingForm)?;

    let weight = f64::from(Weight::parse(&form.weight, form.weight_unit)?);
    let reps = u32::from(Reps::parse(&form.reps)?);

    let one_rep_max = round_to_tenth(one_rep_max(weight, reps, form.formula)?);

    let result = OneRepMaxResult {
        one_rep_max,
        all_formulas: all_formulas(weight, reps)?,
        training_zones: training_zones(one_rep_max)?,
        percentage_chart: percentage_chart(one_rep_max)?,
        selected_formula: form.formula,
        weight_unit: form.weight_unit,
    };

    debug!(
        "calculated one-rep max of {one_rep_max} {} from {weight} {} x {reps} ({})",
        form.weight_unit,
        form.weight_unit,
        form.formula.name()
    );

    Ok(result)
}
