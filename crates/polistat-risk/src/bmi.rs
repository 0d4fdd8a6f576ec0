//! WHO body-mass-index categories

use serde::Serialize;
use std::fmt;

/// WHO-style BMI bucket. Boundary values map to the upper category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Total over all inputs: `18.5`, `25` and `30`
    /// map to the upper category at each boundary.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Risk step for this category, non-decreasing with BMI.
    pub fn risk_step(&self) -> f64 {
        match self {
            Self::Underweight => 0.0,
            Self::Normal => 0.25,
            Self::Overweight => 0.5,
            Self::Obese => 1.0,
        }
    }

    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
