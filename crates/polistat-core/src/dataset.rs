//! The Cleaned Dataset and its provenance counters
//!
//! A `CleanedDataset` is immutable once produced: the pipeline run that
//! created it owns it and hands it by reference to downstream stages.

use crate::record::{PolicyRecord, Region, Smoker};
use serde::Serialize;

/// Exact row counts removed at each cleaning stage.
///
/// Counters are relative: each stage's count is measured against the dataset
/// size after the previous stage, so they always satisfy
/// `final_count = initial_count - duplicates_removed - missing_removed - range_removed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningCounters {
    pub initial_count: usize,
    pub duplicates_removed: usize,
    pub missing_removed: usize,
    pub range_removed: usize,
    pub final_count: usize,
}

impl CleaningCounters {
    /// Fraction of initially loaded rows surviving cleaning, in [0, 1].
    ///
    /// Defined as 0 when `initial_count` is 0 rather than dividing by zero.
    pub fn retention_rate(&self) -> f64 {
        if self.initial_count == 0 {
            0.0
        } else {
            self.final_count as f64 / self.initial_count as f64
        }
    }

    /// Whether the counter arithmetic is internally consistent.
    pub fn is_consistent(&self) -> bool {
        self.initial_count
            == self.final_count
                + self.duplicates_removed
                + self.missing_removed
                + self.range_removed
    }
}

/// The record set after deduplication, missing-value removal, and range
/// filtering, plus provenance counters and the categorical column tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedDataset {
    header: Vec<String>,
    records: Vec<PolicyRecord>,
    counters: CleaningCounters,
    categorical: Vec<String>,
}

impl CleanedDataset {
    pub fn new(
        header: Vec<String>,
        records: Vec<PolicyRecord>,
        counters: CleaningCounters,
        categorical: Vec<String>,
    ) -> Self {
        debug_assert!(counters.is_consistent());
        debug_assert_eq!(counters.final_count, records.len());
        Self {
            header,
            records,
            counters,
            categorical,
        }
    }

    /// Original column order from the source header.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    pub fn counters(&self) -> CleaningCounters {
        self.counters
    }

    /// Columns tagged as fixed-domain categorical fields.
    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty dataset is a valid, terminal state for every downstream
    /// stage, never an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ages(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.age as f64).collect()
    }

    pub fn bmis(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.bmi).collect()
    }

    pub fn children_counts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.children as f64).collect()
    }

    pub fn charges(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.charges).collect()
    }

    /// Charges split into (smoker, non-smoker) groups.
    pub fn charges_by_smoker(&self) -> (Vec<f64>, Vec<f64>) {
        let mut smokers = Vec::new();
        let mut non_smokers = Vec::new();
        for r in &self.records {
            match r.smoker {
                Smoker::Yes => smokers.push(r.charges),
                Smoker::No => non_smokers.push(r.charges),
            }
        }
        (smokers, non_smokers)
    }

    /// Charges grouped by region, in the fixed domain order.
    ///
    /// A region with no surviving rows is simply absent from the result, not
    /// reported as an empty group.
    pub fn charges_by_region(&self) -> Vec<(Region, Vec<f64>)> {
        Region::ALL
            .iter()
            .filter_map(|&region| {
                let charges: Vec<f64> = self
                    .records
                    .iter()
                    .filter(|r| r.region == region)
                    .map(|r| r.charges)
                    .collect();
                if charges.is_empty() {
                    None
                } else {
                    Some((region, charges))
                }
            })
            .collect()
    }
}
