//! Sample moments and tail probabilities shared by the battery

use polistat_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance. Requires at least two observations.
pub fn sample_variance(values: &[f64], mean: f64) -> f64 {
    debug_assert!(values.len() >= 2);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Two-sided p-value of a t statistic.
pub fn t_two_sided(t: f64, df: f64) -> Result<f64> {
    if !t.is_finite() {
        return Err(Error::non_finite("t statistic"));
    }
    if df <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "t-distribution needs positive degrees of freedom, got {df}"
        )));
    }
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("failed to create t-distribution: {e}")))?;
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));
    Ok(p.clamp(0.0, 1.0))
}

/// Upper-tail p-value of an F statistic.
pub fn f_upper_tail(f: f64, df_between: f64, df_within: f64) -> Result<f64> {
    if !f.is_finite() {
        return Err(Error::non_finite("F statistic"));
    }
    if df_between <= 0.0 || df_within <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "F-distribution needs positive degrees of freedom, got ({df_between}, {df_within})"
        )));
    }
    let dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| Error::Computation(format!("failed to create F-distribution: {e}")))?;
    let p = 1.0 - dist.cdf(f.max(0.0));
    Ok(p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_abs_diff_eq!(m, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample_variance(&values, m), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_t_two_sided_reference_values() {
        // t = 0 is the null itself.
        assert_abs_diff_eq!(t_two_sided(0.0, 10.0).unwrap(), 1.0, epsilon = 1e-9);
        // t = 2.228 at df = 10 is the classic 5% two-sided critical value.
        assert_abs_diff_eq!(t_two_sided(2.228, 10.0).unwrap(), 0.05, epsilon = 1e-3);
        // Symmetric in the sign of t.
        assert_abs_diff_eq!(
            t_two_sided(-1.5, 20.0).unwrap(),
            t_two_sided(1.5, 20.0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_f_upper_tail_reference_value() {
        // F = 4.26 at (2, 9) degrees of freedom sits near the 5% point.
        let p = f_upper_tail(4.26, 2.0, 9.0).unwrap();
        assert_abs_diff_eq!(p, 0.05, epsilon = 2e-3);
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        assert!(t_two_sided(f64::NAN, 10.0).is_err());
        assert!(t_two_sided(1.0, 0.0).is_err());
        assert!(f_upper_tail(f64::INFINITY, 2.0, 9.0).is_err());
        assert!(f_upper_tail(1.0, 0.0, 9.0).is_err());
    }
}
