//! Hypothesis test battery for cleaned policyholder data
//!
//! Four fixed tests against the cleaned, feature-enriched dataset:
//!
//! - **Smoking effect**: Welch two-sample comparison of charges between
//!   smokers and non-smokers; effect size is the ratio of group means.
//! - **Age correlation** and **BMI correlation**: Pearson correlation with
//!   charges, two-sided p-value from the t-distribution.
//! - **Regional variance**: one-way comparison of mean charges across the
//!   regions present after cleaning; effect size is eta-squared.
//!
//! Significance is fixed at p < 0.05, with p < 0.001 flagged as highly
//! significant. No test ever surfaces NaN or an infinity: degenerate inputs
//! fail with an insufficient-data error, which the battery records as a
//! "not computable" outcome for the report.

mod anova;
mod battery;
mod correlation;
mod moments;
mod smoking;
mod types;

pub use anova::regional_variance;
pub use battery::run_battery;
pub use correlation::{age_correlation, bmi_correlation, pearson_r};
pub use smoking::smoking_effect;
pub use types::{
    EffectStrength, Significance, TestKind, TestOutcome, TestResult,
    HIGH_SIGNIFICANCE_LEVEL, SIGNIFICANCE_LEVEL,
};
