//! Schema validation for the raw record set
//!
//! Confirms the seven required columns exist and that every non-missing cell
//! converts to its declared type before any transformation proceeds. All
//! offending columns are reported in one batch so the source can be fixed in
//! a single pass. Validation performs no transformation and has no side
//! effects.

use crate::table::{
    is_missing, parse_age, parse_bmi, parse_charges, parse_children, RawTable,
};
use polistat_core::{Error, Region, Result, Sex, Smoker, REQUIRED_COLUMNS};
use tracing::debug;

/// Whether one cell converts to the declared type of its column.
///
/// Missing cells are not a type error; they are removed by the cleaning
/// pipeline's missing-value stage.
fn cell_converts(column: &str, cell: &str) -> bool {
    if is_missing(cell) {
        return true;
    }
    match column {
        "age" => parse_age(cell).is_some(),
        "sex" => Sex::parse(cell).is_some(),
        "bmi" => parse_bmi(cell).is_some(),
        "children" => parse_children(cell).is_some(),
        "smoker" => Smoker::parse(cell).is_some(),
        "region" => Region::parse(cell).is_some(),
        "charges" => parse_charges(cell).is_some(),
        _ => false,
    }
}

/// Validate the raw record set against the required schema.
///
/// On success the table is usable as-is. On failure every missing and
/// mistyped column is named in the returned [`Error::Schema`].
pub fn validate(table: &RawTable) -> Result<()> {
    let positions = table.column_positions();

    let mut missing = Vec::new();
    let mut mistyped = Vec::new();

    for (name, position) in REQUIRED_COLUMNS.iter().zip(positions) {
        let Some(index) = position else {
            missing.push(name.to_string());
            continue;
        };
        let bad_cell = table
            .rows()
            .iter()
            .filter_map(|row| row.get(index))
            .any(|cell| !cell_converts(name, cell));
        if bad_cell {
            mistyped.push(name.to_string());
        }
    }

    if missing.is_empty() && mistyped.is_empty() {
        debug!(rows = table.len(), "schema validated");
        Ok(())
    } else {
        Err(Error::Schema { missing, mistyped })
    }
}
