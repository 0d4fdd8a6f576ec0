//! One-shot analysis runs
//!
//! Strictly sequential control flow: schema validation, cleaning, feature
//! derivation, the test battery, then report assembly. Each stage fully
//! consumes its predecessor's output; a run either completes
//! deterministically or fails with one of the core errors.

use polistat_clean::{clean, read_policy_csv, validate, write_cleaned_csv};
use polistat_core::{CleanedDataset, Result};
use polistat_infer::{run_battery, TestKind, TestOutcome};
use polistat_report::assemble;
use polistat_risk::{derive, DerivedFeatures};
use std::path::Path;
use tracing::info;

/// Everything one analysis run produces
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub dataset: CleanedDataset,
    pub features: Vec<DerivedFeatures>,
    pub outcomes: Vec<(TestKind, TestOutcome)>,
    pub report: String,
}

/// Run the full analysis against an in-memory raw table.
pub fn analyze_table(table: &polistat_clean::RawTable) -> Result<RunArtifacts> {
    validate(table)?;
    let dataset = clean(table)?;
    let features = derive(&dataset);
    let outcomes = run_battery(&dataset)?;
    let report = assemble(&dataset, &features, &outcomes)?;
    Ok(RunArtifacts {
        dataset,
        features,
        outcomes,
        report,
    })
}

/// Run the full analysis from an input file, writing both artifacts: the
/// cleaned snapshot and the analysis report. Both writes are one-shot and
/// non-retried; a fatal error before them leaves nothing written.
pub fn run_file(input: &Path, cleaned_out: &Path, report_out: &Path) -> Result<RunArtifacts> {
    let table = read_policy_csv(input)?;
    let artifacts = analyze_table(&table)?;
    write_cleaned_csv(&artifacts.dataset, cleaned_out)?;
    std::fs::write(report_out, &artifacts.report)?;
    info!(
        rows = artifacts.dataset.len(),
        report = %report_out.display(),
        "analysis run complete"
    );
    Ok(artifacts)
}
