use strum::{Display, EnumString};

#[derive(
    serde::Serialize,
    serde::Deserialize,
    Display,
    EnumString,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    /// Heaviest weight a form accepts in this unit.
    #[must_use]
    pub fn max_weight(self) -> f64 {
        match self {
            WeightUnit::Kg => 500.0,
            WeightUnit::Lb => 1100.0,
        }
    }
}
