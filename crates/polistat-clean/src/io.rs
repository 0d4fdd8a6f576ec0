//! The tabular file boundary
//!
//! One-shot, non-retried reads and writes: loading the raw record set and
//! exporting the cleaned snapshot. The cleaned export carries the same
//! column set as the source, in the original column order, with none of the
//! derived features.

use crate::table::RawTable;
use polistat_core::{CleanedDataset, Error, PolicyRecord, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Load the raw record set from a comma-delimited file with a header row.
///
/// Fails with [`Error::SourceNotFound`] when the path does not resolve;
/// nothing is written in that case.
pub fn read_policy_csv(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let table = RawTable::from_csv_reader(file)?;
    info!(rows = table.len(), path = %path.display(), "loaded raw record set");
    Ok(table)
}

fn field_as_string(record: &PolicyRecord, column: &str) -> Result<String> {
    Ok(match column {
        "age" => record.age.to_string(),
        "sex" => record.sex.to_string(),
        "bmi" => record.bmi.to_string(),
        "children" => record.children.to_string(),
        "smoker" => record.smoker.to_string(),
        "region" => record.region.to_string(),
        "charges" => record.charges.to_string(),
        other => {
            return Err(Error::InvalidInput(format!(
                "unknown export column: {other}"
            )))
        }
    })
}

/// Write the cleaned snapshot back in the same delimited format, one row per
/// surviving record, preserving the source's column order.
pub fn write_cleaned_csv(dataset: &CleanedDataset, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(dataset.header())?;
    for record in dataset.records() {
        let row: Vec<String> = dataset
            .header()
            .iter()
            .map(|column| field_as_string(record, column))
            .collect::<Result<_>>()?;
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!(rows = dataset.len(), path = %path.display(), "wrote cleaned snapshot");
    Ok(())
}
