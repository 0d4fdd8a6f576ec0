//! Pearson correlation tests against charges

use crate::moments::t_two_sided;
use crate::types::{EffectStrength, Significance, TestKind, TestResult};
use polistat_core::{CleanedDataset, Error, Result};
use tracing::debug;

const MIN_ROWS: usize = 3;

/// Pearson correlation coefficient between two equal-length samples.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::InvalidInput(
            "correlation inputs must have the same length".to_string(),
        ));
    }
    if x.len() < 2 {
        return Err(Error::insufficient_data("correlation", 2, x.len()));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return Err(Error::Computation(
            "cannot compute correlation: zero variance".to_string(),
        ));
    }
    Ok(numerator / denominator)
}

fn correlation_test(kind: TestKind, field: &str, x: &[f64], charges: &[f64]) -> Result<TestResult> {
    if x.len() < MIN_ROWS {
        return Err(Error::insufficient_data(kind.name(), MIN_ROWS, x.len()));
    }

    let r = pearson_r(x, charges)?;
    let df = (x.len() - 2) as f64;
    // Guard the denominator at perfect correlation so the statistic stays
    // finite; the p-value underflows to zero either way.
    let t = r * (df / (1.0 - r * r).max(f64::EPSILON)).sqrt();
    let p = t_two_sided(t, df)?;

    debug!(field, r, t, p, n = x.len(), "computed correlation");

    let direction = if r >= 0.0 { "positively" } else { "negatively" };
    let strength = EffectStrength::for_correlation(r);
    let interpretation = format!(
        "{field} and charges are {direction} correlated (r = {r:.3}, {strength}); association is {}",
        Significance::from_p(p).phrase(p),
    );

    TestResult::new(kind, t, p, r, interpretation)
}

/// Pearson correlation between age and charges over all rows.
pub fn age_correlation(dataset: &CleanedDataset) -> Result<TestResult> {
    correlation_test(
        TestKind::AgeCorrelation,
        "age",
        &dataset.ages(),
        &dataset.charges(),
    )
}

/// Pearson correlation between BMI and charges over all rows.
pub fn bmi_correlation(dataset: &CleanedDataset) -> Result<TestResult> {
    correlation_test(
        TestKind::BmiCorrelation,
        "bmi",
        &dataset.bmis(),
        &dataset.charges(),
    )
}
