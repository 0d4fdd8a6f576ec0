//! Regional variance: one-way comparison of charges means across regions
//!
//! One group per distinct region present in the data; a region emptied by
//! cleaning is simply absent from the group set. Effect size is eta-squared,
//! the proportion of charge variance explained by region membership.

use crate::moments::{f_upper_tail, mean};
use crate::types::{EffectStrength, Significance, TestKind, TestResult};
use polistat_core::{CleanedDataset, Error, Result};
use tracing::debug;

const MIN_GROUPS: usize = 2;
const MIN_GROUP_SIZE: usize = 2;

/// One-way test of the null hypothesis that mean charges are equal across
/// the regions present after cleaning.
pub fn regional_variance(dataset: &CleanedDataset) -> Result<TestResult> {
    let groups = dataset.charges_by_region();

    if groups.len() < MIN_GROUPS {
        return Err(Error::insufficient_data(
            "regional variance",
            MIN_GROUPS,
            groups.len(),
        ));
    }
    if let Some((_, small)) = groups.iter().find(|(_, g)| g.len() < MIN_GROUP_SIZE) {
        return Err(Error::insufficient_data(
            "regional variance group",
            MIN_GROUP_SIZE,
            small.len(),
        ));
    }

    let k = groups.len();
    let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
    let grand_mean = groups
        .iter()
        .flat_map(|(_, g)| g.iter())
        .sum::<f64>()
        / total as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    let mut group_means = Vec::with_capacity(k);
    for (region, charges) in &groups {
        let m = mean(charges);
        ss_between += charges.len() as f64 * (m - grand_mean).powi(2);
        ss_within += charges.iter().map(|c| (c - m).powi(2)).sum::<f64>();
        group_means.push((*region, m));
    }

    let df_between = (k - 1) as f64;
    let df_within = (total - k) as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    if ms_within <= 0.0 {
        return Err(Error::Computation(
            "zero within-group variance in charges".to_string(),
        ));
    }

    let f = ms_between / ms_within;
    let p = f_upper_tail(f, df_between, df_within)?;

    let ss_total = ss_between + ss_within;
    let eta_squared = if ss_total > 0.0 {
        ss_between / ss_total
    } else {
        0.0
    };

    debug!(f, p, eta_squared, groups = k, n = total, "computed regional variance");

    let means_text = group_means
        .iter()
        .map(|(region, m)| format!("{region} {m:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    let strength = EffectStrength::for_variance_explained(eta_squared);
    let interpretation = format!(
        "mean charges by region: {means_text}; region explains {:.1}% of charge variance ({strength}); differences are {}",
        eta_squared * 100.0,
        Significance::from_p(p).phrase(p),
    );

    TestResult::new(TestKind::RegionalVariance, f, p, eta_squared, interpretation)
}
