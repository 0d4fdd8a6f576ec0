//! The Analysis Report assembler
//!
//! Pure aggregation of the cleaning counters, descriptive statistics, derived
//! risk features, and test outcomes into one ordered text artifact. Section
//! order is fixed: cleaning summary, descriptive statistics, one subsection
//! per hypothesis test. An empty dataset produces the cleaning summary plus
//! an explicit notice; assembly itself never fails on empty data.

use crate::format::{currency, number, percent, percent_opt, NOT_AVAILABLE};
use polistat_core::{describe, CleanedDataset, Descriptives, Result};
use polistat_infer::{pearson_r, TestKind, TestOutcome};
use polistat_risk::{AgeBand, BmiCategory, ChargesBand, DerivedFeatures};
use std::fmt::Write;
use tracing::debug;

const NUMERIC_FIELDS: [&str; 4] = ["age", "bmi", "children", "charges"];

/// Assemble the full report text.
pub fn assemble(
    dataset: &CleanedDataset,
    features: &[DerivedFeatures],
    outcomes: &[(TestKind, TestOutcome)],
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "POLICYHOLDER COST ANALYSIS REPORT").unwrap();
    writeln!(out, "=================================").unwrap();
    writeln!(out).unwrap();

    cleaning_summary(&mut out, dataset);

    if dataset.is_empty() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "No rows survived cleaning; no statistical analysis could be performed."
        )
        .unwrap();
        return Ok(out);
    }

    let descriptives = describe(dataset)?;
    writeln!(out).unwrap();
    descriptive_section(&mut out, dataset, &descriptives);
    risk_section(&mut out, features);
    writeln!(out).unwrap();
    tests_section(&mut out, outcomes);

    debug!(bytes = out.len(), "assembled report");
    Ok(out)
}

fn cleaning_summary(out: &mut String, dataset: &CleanedDataset) {
    let c = dataset.counters();
    writeln!(out, "Cleaning Summary").unwrap();
    writeln!(out, "----------------").unwrap();
    writeln!(out, "Initial rows:         {}", c.initial_count).unwrap();
    writeln!(out, "Duplicates removed:   {}", c.duplicates_removed).unwrap();
    writeln!(out, "Missing removed:      {}", c.missing_removed).unwrap();
    writeln!(out, "Out-of-range removed: {}", c.range_removed).unwrap();
    writeln!(out, "Final rows:           {}", c.final_count).unwrap();
    writeln!(out, "Retention rate:       {}", percent(c.retention_rate())).unwrap();
}

fn descriptive_section(out: &mut String, dataset: &CleanedDataset, descriptives: &Descriptives) {
    writeln!(out, "Descriptive Statistics").unwrap();
    writeln!(out, "----------------------").unwrap();

    for summary in &descriptives.numeric {
        // Currency formatting for the charges field, plain numbers elsewhere.
        let fmt: fn(f64) -> String = if summary.field == "charges" {
            currency
        } else {
            |v| number(v, 2)
        };
        writeln!(
            out,
            "{:<9} n={} mean={} min={} q1={} median={} q3={} max={}",
            summary.field,
            summary.count,
            fmt(summary.mean),
            fmt(summary.min),
            fmt(summary.q1),
            fmt(summary.median),
            fmt(summary.q3),
            fmt(summary.max),
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    for summary in &descriptives.categorical {
        let counts = summary
            .counts
            .iter()
            .map(|(value, count)| format!("{value} {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "{:<9} {counts}", summary.field).unwrap();
    }

    writeln!(out).unwrap();
    let rates = &descriptives.rates;
    writeln!(out, "Smoking rate:   {}", percent_opt(rates.smoking_rate)).unwrap();
    writeln!(out, "Obesity rate:   {}", percent_opt(rates.obesity_rate)).unwrap();
    writeln!(
        out,
        "Average age:    {}",
        rates
            .mean_age
            .map_or(NOT_AVAILABLE.to_string(), |v| number(v, 1))
    )
    .unwrap();
    writeln!(
        out,
        "Average BMI:    {}",
        rates
            .mean_bmi
            .map_or(NOT_AVAILABLE.to_string(), |v| number(v, 1))
    )
    .unwrap();
    writeln!(
        out,
        "Median charges: {}",
        rates
            .median_charges
            .map_or(NOT_AVAILABLE.to_string(), currency)
    )
    .unwrap();

    correlation_matrix(out, dataset);
}

fn correlation_matrix(out: &mut String, dataset: &CleanedDataset) {
    let columns = [
        dataset.ages(),
        dataset.bmis(),
        dataset.children_counts(),
        dataset.charges(),
    ];

    writeln!(out).unwrap();
    writeln!(out, "Correlation matrix (Pearson r)").unwrap();
    write!(out, "{:<9}", "").unwrap();
    for field in NUMERIC_FIELDS {
        write!(out, " {field:>8}").unwrap();
    }
    writeln!(out).unwrap();

    for (i, row_field) in NUMERIC_FIELDS.iter().enumerate() {
        write!(out, "{row_field:<9}").unwrap();
        for j in 0..NUMERIC_FIELDS.len() {
            let cell = if i == j {
                number(1.0, 3)
            } else {
                // Zero-variance columns have no defined correlation; render
                // the placeholder instead of propagating the failure.
                pearson_r(&columns[i], &columns[j])
                    .map(|r| number(r, 3))
                    .unwrap_or_else(|_| NOT_AVAILABLE.to_string())
            };
            write!(out, " {cell:>8}").unwrap();
        }
        writeln!(out).unwrap();
    }
}

fn risk_section(out: &mut String, features: &[DerivedFeatures]) {
    if features.is_empty() {
        return;
    }

    writeln!(out).unwrap();
    writeln!(out, "Derived Risk Features").unwrap();
    writeln!(out, "---------------------").unwrap();

    let bmi_counts = BmiCategory::ALL
        .iter()
        .filter_map(|&category| {
            let count = features.iter().filter(|f| f.bmi_category == category).count();
            (count > 0).then(|| format!("{category} {count}"))
        })
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "BMI categories: {bmi_counts}").unwrap();

    let mut age_bands: Vec<AgeBand> = features.iter().map(|f| f.age_band).collect();
    age_bands.sort();
    age_bands.dedup();
    let band_counts = age_bands
        .iter()
        .map(|&band| {
            let count = features.iter().filter(|f| f.age_band == band).count();
            format!("{} {count}", band.range_str())
        })
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Age bands:      {band_counts}").unwrap();

    let mut charges_bands: Vec<ChargesBand> =
        features.iter().map(|f| f.charges_band).collect();
    charges_bands.sort();
    charges_bands.dedup();
    let charges_counts = charges_bands
        .iter()
        .map(|&band| {
            let count = features.iter().filter(|f| f.charges_band == band).count();
            format!("{band} {count}")
        })
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Charges bands:  {charges_counts}").unwrap();

    let mean_risk = features.iter().map(|f| f.risk_score).sum::<f64>() / features.len() as f64;
    writeln!(out, "Mean risk score: {}", number(mean_risk, 3)).unwrap();
}

fn tests_section(out: &mut String, outcomes: &[(TestKind, TestOutcome)]) {
    writeln!(out, "Hypothesis Tests").unwrap();
    writeln!(out, "----------------").unwrap();

    for (kind, outcome) in outcomes {
        writeln!(out).unwrap();
        writeln!(out, "[{kind}]").unwrap();
        match outcome {
            TestOutcome::Computed(result) => {
                writeln!(out, "  statistic:   {}", number(result.statistic, 4)).unwrap();
                writeln!(out, "  p-value:     {}", number(result.p_value, 4)).unwrap();
                writeln!(out, "  effect size: {}", number(result.effect_size, 4)).unwrap();
                writeln!(
                    out,
                    "  significant: {}",
                    if result.significant { "yes" } else { "no" }
                )
                .unwrap();
                writeln!(out, "  {}", result.interpretation).unwrap();
            }
            TestOutcome::NotComputable { reason } => {
                writeln!(out, "  not computable: {reason}").unwrap();
            }
        }
    }
}
