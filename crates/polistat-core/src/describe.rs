//! Descriptive statistics over a cleaned dataset
//!
//! Five-point summaries for the numeric fields, value counts for the
//! categorical fields, and the headline rates surfaced in the report.

use crate::dataset::CleanedDataset;
use crate::error::{Error, Result};
use crate::record::{Region, Sex, Smoker};
use serde::Serialize;

/// Five-point summary plus mean for one numeric field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub field: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl NumericSummary {
    pub fn from_values(field: &str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidInput(format!(
                "cannot summarize empty field {field}"
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite(field));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        Ok(Self {
            field: field.to_string(),
            count: sorted.len(),
            mean,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Value counts for one categorical field, in fixed domain order.
///
/// Values with no surviving rows are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    pub field: String,
    pub counts: Vec<(String, usize)>,
}

/// Headline rates for the report.
///
/// Percentages over a zero total are `None` so the report renders a literal
/// placeholder instead of propagating a non-finite value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyRates {
    pub smoking_rate: Option<f64>,
    pub obesity_rate: Option<f64>,
    pub mean_age: Option<f64>,
    pub mean_bmi: Option<f64>,
    pub median_charges: Option<f64>,
}

/// Descriptive statistics for a cleaned dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptives {
    pub numeric: Vec<NumericSummary>,
    pub categorical: Vec<CategoricalSummary>,
    pub rates: KeyRates,
}

/// Quantile by linear interpolation between closest ranks (R-7).
///
/// Input must be sorted and non-empty.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

fn categorical_counts<T, I>(field: &str, domain: I, observed: &[T]) -> CategoricalSummary
where
    T: PartialEq + ToString + Copy,
    I: IntoIterator<Item = T>,
{
    let counts = domain
        .into_iter()
        .filter_map(|value| {
            let count = observed.iter().filter(|&&v| v == value).count();
            if count == 0 {
                None
            } else {
                Some((value.to_string(), count))
            }
        })
        .collect();
    CategoricalSummary {
        field: field.to_string(),
        counts,
    }
}

/// Compute descriptive statistics for a cleaned dataset.
///
/// An empty dataset yields empty summaries and all-placeholder rates.
pub fn describe(dataset: &CleanedDataset) -> Result<Descriptives> {
    if dataset.is_empty() {
        return Ok(Descriptives {
            numeric: vec![],
            categorical: vec![],
            rates: KeyRates {
                smoking_rate: None,
                obesity_rate: None,
                mean_age: None,
                mean_bmi: None,
                median_charges: None,
            },
        });
    }

    let ages = dataset.ages();
    let bmis = dataset.bmis();
    let children = dataset.children_counts();
    let charges = dataset.charges();

    let numeric = vec![
        NumericSummary::from_values("age", &ages)?,
        NumericSummary::from_values("bmi", &bmis)?,
        NumericSummary::from_values("children", &children)?,
        NumericSummary::from_values("charges", &charges)?,
    ];

    let records = dataset.records();
    let sexes: Vec<Sex> = records.iter().map(|r| r.sex).collect();
    let smokers: Vec<Smoker> = records.iter().map(|r| r.smoker).collect();
    let regions: Vec<Region> = records.iter().map(|r| r.region).collect();

    let categorical = vec![
        categorical_counts("sex", Sex::ALL, &sexes),
        categorical_counts("smoker", Smoker::ALL, &smokers),
        categorical_counts("region", Region::ALL, &regions),
    ];

    let n = records.len() as f64;
    let smoking = smokers.iter().filter(|&&s| s == Smoker::Yes).count() as f64;
    let obese = bmis.iter().filter(|&&b| b >= 30.0).count() as f64;

    let rates = KeyRates {
        smoking_rate: Some(smoking / n),
        obesity_rate: Some(obese / n),
        mean_age: Some(numeric[0].mean),
        mean_bmi: Some(numeric[1].mean),
        median_charges: Some(numeric[3].median),
    };

    Ok(Descriptives {
        numeric,
        categorical,
        rates,
    })
}
