//! Schema validation and deterministic cleaning for policyholder data
//!
//! The entry sequence is fixed: load a raw table, validate its schema, then
//! run the four-stage cleaning pipeline. Each stage fully consumes its
//! predecessor's output; removal counts are recorded per stage so cleaning
//! decisions stay auditable.
//!
//! # Example
//!
//! ```
//! use polistat_clean::{clean, validate, RawTable};
//!
//! let csv = "age,sex,bmi,children,smoker,region,charges\n\
//!            19,female,27.9,0,yes,southwest,16884.92\n\
//!            19,female,27.9,0,yes,southwest,16884.92\n";
//! let table = RawTable::from_csv_reader(csv.as_bytes()).unwrap();
//! validate(&table).unwrap();
//! let dataset = clean(&table).unwrap();
//! assert_eq!(dataset.counters().duplicates_removed, 1);
//! assert_eq!(dataset.len(), 1);
//! ```

pub mod io;
pub mod pipeline;
pub mod schema;
pub mod table;

pub use io::{read_policy_csv, write_cleaned_csv};
pub use pipeline::clean;
pub use schema::validate;
pub use table::RawTable;
