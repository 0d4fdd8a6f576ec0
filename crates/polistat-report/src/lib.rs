//! Text report assembly for the policyholder analysis engine
//!
//! The report is a write-once UTF-8 artifact with a fixed section order:
//! cleaning summary, descriptive statistics, derived risk features, then one
//! subsection per hypothesis test. Formatting is fixed too: currency with
//! two decimals and thousands separators, percentages with one decimal, and
//! non-finite values normalized to a literal `N/A` at this boundary.

pub mod assembler;
pub mod format;

pub use assembler::assemble;
pub use format::{currency, number, percent, percent_opt, NOT_AVAILABLE};
