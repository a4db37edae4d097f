use crate::{CalculationError, round_to_tenth, zones::check_one_rep_max};

/// Typical achievable reps per percentage of the one-rep max, from 100 % down to 50 %.
pub static PERCENTAGE_CHART: [(u8, &str); 11] = [
    (100, "1"),
    (95, "2"),
    (90, "3-4"),
    (85, "5-6"),
    (80, "7-8"),
    (75, "9-10"),
    (70, "11-12"),
    (65, "13-15"),
    (60, "16-20"),
    (55, "20-25"),
    (50, "25+"),
];

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PercentageChartEntry {
    pub percentage: u8,
    pub weight: f64,
    pub estimated_reps: String,
}

/// Map [`PERCENTAGE_CHART`] onto the given one-rep max.
///
/// The rep column is taken from the static table, not from
/// [`estimate_reps_at_percentage`]; both may disagree for the same percentage.
pub fn percentage_chart(one_rep_max: f64) -> Result<Vec<PercentageChartEntry>, CalculationError> {
    check_one_rep_max(one_rep_max)?;

    Ok(PERCENTAGE_CHART
        .iter()
        .map(|(percentage, estimated_reps)| PercentageChartEntry {
            percentage: *percentage,
            weight: round_to_tenth(one_rep_max * f64::from(*percentage) / 100.0),
            estimated_reps: (*estimated_reps).to_string(),
        })
        .collect())
}

/// Number of reps achievable at a percentage of the one-rep max, using the inverse Epley formula.
pub fn estimate_reps_at_percentage(percentage: f64) -> Result<u32, CalculationError> {
    check_percentage(percentage)?;

    let reps = (30.0 * (100.0 / percentage - 1.0)).round().max(1.0);
    if reps > f64::from(u32::MAX) {
        return Err(CalculationError::RepsNotRepresentable);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(reps as u32)
}

pub fn weight_at_percentage(one_rep_max: f64, percentage: f64) -> Result<f64, CalculationError> {
    check_one_rep_max(one_rep_max)?;
    check_percentage(percentage)?;

    Ok(round_to_tenth(one_rep_max * percentage / 100.0))
}

fn check_percentage(percentage: f64) -> Result<(), CalculationError> {
    if percentage.is_nan() || percentage <= 0.0 || percentage > 100.0 {
        return Err(CalculationError::PercentageOutOfRange);
    }

    Ok(())
}
