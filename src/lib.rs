//! Insurance policyholder cleaning and statistical analysis engine
//!
//! Ingests a tabular record set of policyholders, produces a validated and
//! cleaned dataset with auditable removal counts, derives risk features,
//! runs a fixed battery of hypothesis tests, and emits a reproducible text
//! report of the findings.
//!
//! The pipeline is strictly sequential and one-shot:
//!
//! ```text
//! schema validation -> cleaning -> feature derivation -> test battery -> report
//! ```
//!
//! # Example
//!
//! ```
//! use polistat::analyze_table;
//! use polistat::clean::RawTable;
//!
//! let csv = "age,sex,bmi,children,smoker,region,charges\n\
//!            19,female,27.9,0,yes,southwest,16884.92\n\
//!            18,male,33.77,1,no,southeast,1725.55\n";
//! let table = RawTable::from_csv_reader(csv.as_bytes()).unwrap();
//! let artifacts = analyze_table(&table).unwrap();
//! assert_eq!(artifacts.dataset.len(), 2);
//! assert!(artifacts.report.contains("Cleaning Summary"));
//! ```

mod run;

pub use run::{analyze_table, run_file, RunArtifacts};

// Re-export workspace crates
pub use polistat_clean as clean;
pub use polistat_core as core;
pub use polistat_infer as infer;
pub use polistat_report as report;
pub use polistat_risk as risk;

pub use polistat_core::{CleanedDataset, CleaningCounters, Error, PolicyRecord, Result};
pub use polistat_infer::{TestKind, TestOutcome, TestResult};
