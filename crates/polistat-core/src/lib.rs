//! Core types for policyholder cleaning and analysis
//!
//! This crate holds the data model shared by the whole engine: the unified
//! error type, the `PolicyRecord` with enumerated categorical domains, the
//! `CleanedDataset` with its provenance counters, and descriptive statistics.
//!
//! Every downstream stage consumes the dataset by reference; nothing in this
//! crate mutates a dataset once it is constructed.

pub mod dataset;
pub mod describe;
pub mod error;
pub mod record;

pub use dataset::{CleanedDataset, CleaningCounters};
pub use describe::{describe, CategoricalSummary, Descriptives, KeyRates, NumericSummary};
pub use error::{Error, Result};
pub use record::{
    PolicyRecord, Region, Sex, Smoker, AGE_BOUNDS, BMI_BOUNDS, MAX_CHILDREN, REQUIRED_COLUMNS,
};
