//! The four-stage cleaning pipeline
//!
//! Stage order matters: each stage's removal count is measured against the
//! dataset size after the previous stage, not the original. An input that is
//! or becomes empty is a valid terminal state, never an error.

use crate::table::{is_missing, parse_age, parse_record, RawTable};
use polistat_core::{
    CleanedDataset, CleaningCounters, Error, PolicyRecord, Result, REQUIRED_COLUMNS,
};
use std::collections::HashSet;
use tracing::debug;

/// Columns tagged as fixed-domain categorical fields in stage four.
const CATEGORICAL_COLUMNS: [&str; 3] = ["sex", "smoker", "region"];

/// Run the cleaning pipeline over a schema-validated raw record set.
///
/// Stages, in order:
/// 1. deduplication (exact full-row equality, first occurrence kept)
/// 2. missing-value removal
/// 3. range filtering against the record invariants
/// 4. categorical tagging (row count unchanged)
pub fn clean(table: &RawTable) -> Result<CleanedDataset> {
    let positions = table.column_positions();
    let indices: Vec<usize> = positions
        .iter()
        .map(|p| {
            p.ok_or_else(|| {
                Error::InvalidInput("cleaning requires a schema-validated table".to_string())
            })
        })
        .collect::<Result<_>>()?;

    let initial_count = table.len();

    // Stage 1: deduplication
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(initial_count);
    let deduped: Vec<&Vec<String>> = table
        .rows()
        .iter()
        .filter(|row| seen.insert(row.as_slice()))
        .collect();
    let duplicates_removed = initial_count - deduped.len();
    debug!(duplicates_removed, remaining = deduped.len(), "deduplicated");

    // Stage 2: missing-value removal
    let complete: Vec<&Vec<String>> = deduped
        .iter()
        .filter(|row| {
            indices
                .iter()
                .all(|&i| row.get(i).is_some_and(|cell| !is_missing(cell)))
        })
        .copied()
        .collect();
    let missing_removed = deduped.len() - complete.len();
    debug!(missing_removed, remaining = complete.len(), "removed incomplete rows");

    // Stage 3: range filtering
    let mut records: Vec<PolicyRecord> = Vec::with_capacity(complete.len());
    for row in &complete {
        let cells: [&str; 7] = std::array::from_fn(|k| row[indices[k]].as_str());
        // A negative age is well-typed but cannot represent as `u32`; it is
        // out of range here, not a schema failure upstream.
        let age_representable = parse_age(cells[0])
            .is_some_and(|age| u32::try_from(age).is_ok());
        if !age_representable {
            continue;
        }
        let record = parse_record(&cells)?;
        if record.within_bounds() {
            records.push(record);
        }
    }
    let range_removed = complete.len() - records.len();
    debug!(range_removed, remaining = records.len(), "filtered out-of-range rows");

    // Stage 4: categorical tagging
    let categorical: Vec<String> = CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect();

    let counters = CleaningCounters {
        initial_count,
        duplicates_removed,
        missing_removed,
        range_removed,
        final_count: records.len(),
    };

    let header: Vec<String> = if table.header().is_empty() {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        table.header().to_vec()
    };

    Ok(CleanedDataset::new(header, records, counters, categorical))
}
