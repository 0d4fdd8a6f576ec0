//! Test result types and significance conventions

use polistat_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Significance threshold for every test in the battery
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
/// p-values below this are flagged as highly significant
pub const HIGH_SIGNIFICANCE_LEVEL: f64 = 0.001;

/// The four hypotheses in the fixed battery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TestKind {
    SmokingEffect,
    AgeCorrelation,
    BmiCorrelation,
    RegionalVariance,
}

impl TestKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SmokingEffect => "Smoking effect",
            Self::AgeCorrelation => "Age correlation",
            Self::BmiCorrelation => "BMI correlation",
            Self::RegionalVariance => "Regional variance",
        }
    }

    /// Fixed battery order
    pub const ALL: [TestKind; 4] = [
        TestKind::SmokingEffect,
        TestKind::AgeCorrelation,
        TestKind::BmiCorrelation,
        TestKind::RegionalVariance,
    ];
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Significance classification at the fixed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Significance {
    NotSignificant,
    Significant,
    HighlySignificant,
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p < HIGH_SIGNIFICANCE_LEVEL {
            Self::HighlySignificant
        } else if p < SIGNIFICANCE_LEVEL {
            Self::Significant
        } else {
            Self::NotSignificant
        }
    }

    /// Phrase used inside interpretations.
    pub fn phrase(&self, p: f64) -> String {
        match self {
            Self::HighlySignificant => "highly significant (p < 0.001)".to_string(),
            Self::Significant => format!("significant (p = {p:.4})"),
            Self::NotSignificant => format!("not significant (p = {p:.4})"),
        }
    }
}

/// Strength conventions for effect magnitudes (Cohen's conventions for
/// correlations, eta-squared conventions for variance explained).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffectStrength {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectStrength {
    pub fn for_correlation(r: f64) -> Self {
        let r = r.abs();
        if r < 0.1 {
            Self::Negligible
        } else if r < 0.3 {
            Self::Small
        } else if r < 0.5 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn for_variance_explained(eta_squared: f64) -> Self {
        let v = eta_squared.abs();
        if v < 0.01 {
            Self::Negligible
        } else if v < 0.06 {
            Self::Small
        } else if v < 0.14 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one hypothesis test. Created once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub kind: TestKind,
    pub statistic: f64,
    pub p_value: f64,
    pub effect_size: f64,
    pub significant: bool,
    pub interpretation: String,
}

impl TestResult {
    /// Build a result, refusing any non-finite statistic, p-value outside
    /// [0, 1], or non-finite effect size.
    pub fn new(
        kind: TestKind,
        statistic: f64,
        p_value: f64,
        effect_size: f64,
        interpretation: String,
    ) -> Result<Self> {
        if !statistic.is_finite() {
            return Err(Error::non_finite(&format!("{kind} statistic")));
        }
        if !p_value.is_finite() || !(0.0..=1.0).contains(&p_value) {
            return Err(Error::non_finite(&format!("{kind} p-value")));
        }
        if !effect_size.is_finite() {
            return Err(Error::non_finite(&format!("{kind} effect size")));
        }
        Ok(Self {
            kind,
            statistic,
            p_value,
            effect_size,
            significant: p_value < SIGNIFICANCE_LEVEL,
            interpretation,
        })
    }

    pub fn significance(&self) -> Significance {
        Significance::from_p(self.p_value)
    }
}

/// One battery slot: either a computed result or a recorded reason why the
/// test could not be computed safely. The report renders the latter as
/// "not computable" and continues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TestOutcome {
    Computed(TestResult),
    NotComputable { reason: String },
}
