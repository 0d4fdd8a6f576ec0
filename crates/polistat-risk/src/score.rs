//! Composite risk score
//!
//! The score is a pure function of one record's own fields: a normalized
//! base risk, monotone in age and in BMI category, scaled by a fixed smoker
//! multiplier.

use crate::bmi::BmiCategory;
use polistat_core::{PolicyRecord, Smoker, AGE_BOUNDS};

/// Smokers score exactly this multiple of an otherwise-identical non-smoker.
pub const SMOKER_MULTIPLIER: f64 = 3.5;

const AGE_WEIGHT: f64 = 0.6;
const BMI_WEIGHT: f64 = 0.4;

/// Normalized base risk in [0, 1].
///
/// `0.6 × age_norm + 0.4 × bmi_step`, where `age_norm` places the age within
/// the cleaned [18, 100] range and `bmi_step` is the category's risk step.
pub fn base_risk(age: u32, category: BmiCategory) -> f64 {
    let span = (AGE_BOUNDS.1 - AGE_BOUNDS.0) as f64;
    let age_norm = ((age.saturating_sub(AGE_BOUNDS.0)) as f64 / span).clamp(0.0, 1.0);
    AGE_WEIGHT * age_norm + BMI_WEIGHT * category.risk_step()
}

/// Composite risk score for one cleaned record.
pub fn risk_score(record: &PolicyRecord) -> f64 {
    let base = base_risk(record.age, BmiCategory::from_bmi(record.bmi));
    match record.smoker {
        Smoker::Yes => base * SMOKER_MULTIPLIER,
        Smoker::No => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use polistat_core::{Region, Sex};
    use proptest::prelude::*;

    fn record(age: u32, bmi: f64, smoker: Smoker) -> PolicyRecord {
        PolicyRecord {
            age,
            sex: Sex::Male,
            bmi,
            children: 0,
            smoker,
            region: Region::Northeast,
            charges: 5000.0,
        }
    }

    #[test]
    fn test_base_risk_bounds() {
        assert_abs_diff_eq!(
            base_risk(18, BmiCategory::Underweight),
            0.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(base_risk(100, BmiCategory::Obese), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_base_risk_monotone_in_age() {
        for age in 18..100 {
            assert!(
                base_risk(age, BmiCategory::Normal) < base_risk(age + 1, BmiCategory::Normal)
            );
        }
    }

    #[test]
    fn test_base_risk_monotone_in_bmi_category() {
        let scores: Vec<f64> = BmiCategory::ALL.iter().map(|&c| base_risk(50, c)).collect();
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
    }

    proptest! {
        /// A smoker scores exactly 3.5x an otherwise-identical non-smoker.
        #[test]
        fn prop_smoker_multiplier_exact(age in 18u32..=100, bmi in 10.0f64..=60.0) {
            let smoker = risk_score(&record(age, bmi, Smoker::Yes));
            let non_smoker = risk_score(&record(age, bmi, Smoker::No));
            prop_assert_eq!(smoker, non_smoker * SMOKER_MULTIPLIER);
        }

        /// Non-smoker scores stay normalized.
        #[test]
        fn prop_non_smoker_score_in_unit_interval(age in 18u32..=100, bmi in 10.0f64..=60.0) {
            let score = risk_score(&record(age, bmi, Smoker::No));
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
