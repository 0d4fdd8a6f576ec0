//! The raw record set as loaded from the tabular source
//!
//! Cells stay untyped strings until the schema validator has confirmed every
//! required column exists and converts; the cleaning pipeline does the typed
//! parse afterwards.

use polistat_core::{Error, PolicyRecord, Region, Result, Sex, Smoker, REQUIRED_COLUMNS};
use std::io::Read;

/// A raw, untyped table: the observed header plus one string row per record.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Parse a comma-delimited source with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let header: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of each required column within the header, in the canonical
    /// `REQUIRED_COLUMNS` order. `None` marks a missing column.
    pub fn column_positions(&self) -> [Option<usize>; 7] {
        let mut positions = [None; 7];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = self.header.iter().position(|h| h == name);
        }
        positions
    }
}

/// Whether a cell counts as a missing value.
pub fn is_missing(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Age types as a signed integer: a negative value converts fine and is
/// rejected later by the range-filtering stage, not by schema validation.
pub fn parse_age(cell: &str) -> Option<i64> {
    cell.trim().parse::<i64>().ok()
}

pub fn parse_children(cell: &str) -> Option<u32> {
    cell.trim().parse::<u32>().ok()
}

pub fn parse_bmi(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_charges(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Typed parse of one row's required cells, in `REQUIRED_COLUMNS` order.
///
/// Only called after schema validation and missing-value removal, so a
/// failure here indicates an internal inconsistency rather than bad input.
pub fn parse_record(cells: &[&str; 7]) -> Result<PolicyRecord> {
    let invalid = |field: &str, cell: &str| {
        Error::InvalidInput(format!("unparseable {field} value: {cell:?}"))
    };

    Ok(PolicyRecord {
        age: parse_age(cells[0])
            .and_then(|a| u32::try_from(a).ok())
            .ok_or_else(|| invalid("age", cells[0]))?,
        sex: Sex::parse(cells[1]).ok_or_else(|| invalid("sex", cells[1]))?,
        bmi: parse_bmi(cells[2]).ok_or_else(|| invalid("bmi", cells[2]))?,
        children: parse_children(cells[3]).ok_or_else(|| invalid("children", cells[3]))?,
        smoker: Smoker::parse(cells[4]).ok_or_else(|| invalid("smoker", cells[4]))?,
        region: Region::parse(cells[5]).ok_or_else(|| invalid("region", cells[5]))?,
        charges: parse_charges(cells[6]).ok_or_else(|| invalid("charges", cells[6]))?,
    })
}
