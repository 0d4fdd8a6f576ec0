//! Smoking effect: two-sample comparison of charges
//!
//! Welch's t-test between the smoker and non-smoker groups, with the ratio of
//! group means as the effect size.

use crate::moments::{mean, sample_variance, t_two_sided};
use crate::types::{Significance, TestKind, TestResult};
use polistat_core::{CleanedDataset, Error, Result};
use tracing::debug;

const MIN_GROUP_SIZE: usize = 2;

/// Compare charges between smokers and non-smokers.
///
/// Fails with an insufficient-data error if either group has fewer than two
/// members rather than returning a misleading statistic.
pub fn smoking_effect(dataset: &CleanedDataset) -> Result<TestResult> {
    let (smokers, non_smokers) = dataset.charges_by_smoker();
    let smallest = smokers.len().min(non_smokers.len());
    if smallest < MIN_GROUP_SIZE {
        return Err(Error::insufficient_data(
            "smoking effect",
            MIN_GROUP_SIZE,
            smallest,
        ));
    }

    let n1 = smokers.len() as f64;
    let n2 = non_smokers.len() as f64;
    let m1 = mean(&smokers);
    let m2 = mean(&non_smokers);
    let v1 = sample_variance(&smokers, m1);
    let v2 = sample_variance(&non_smokers, m2);

    let standard_error = (v1 / n1 + v2 / n2).sqrt();
    if standard_error <= 0.0 {
        return Err(Error::Computation(
            "both charge groups have zero variance".to_string(),
        ));
    }

    let t = (m1 - m2) / standard_error;

    // Welch-Satterthwaite degrees of freedom
    let df = (v1 / n1 + v2 / n2).powi(2)
        / ((v1 / n1).powi(2) / (n1 - 1.0) + (v2 / n2).powi(2) / (n2 - 1.0));
    let p = t_two_sided(t, df)?;

    // Charges are strictly positive after cleaning, so the ratio denominator
    // cannot be zero; guard anyway rather than let an infinity through.
    if m2 <= 0.0 {
        return Err(Error::non_finite("smoking effect mean ratio"));
    }
    let ratio = m1 / m2;

    debug!(t, p, ratio, n_smokers = smokers.len(), n_non_smokers = non_smokers.len(),
           "computed smoking effect");

    let direction = if m1 > m2 { "more" } else { "less" };
    let interpretation = format!(
        "mean charges: smokers {m1:.2} vs non-smokers {m2:.2}; smokers pay {ratio:.2}x ({direction}); difference is {}",
        Significance::from_p(p).phrase(p),
    );

    TestResult::new(TestKind::SmokingEffect, t, p, ratio, interpretation)
}
