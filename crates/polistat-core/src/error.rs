//! Error types for policyholder cleaning and analysis
//!
//! Provides a unified error type for all polistat crates.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cleaning and statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required columns are missing from the source or hold values that
    /// cannot be converted to their declared types. Both lists are complete
    /// so a caller can fix the source in a single pass.
    #[error("schema validation failed: missing columns [{}]; mistyped columns [{}]", .missing.join(", "), .mistyped.join(", "))]
    Schema {
        missing: Vec<String>,
        mistyped: Vec<String>,
    },

    /// Input location does not resolve to a readable source
    #[error("input source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// A statistical test cannot be computed safely on this data
    #[error("insufficient data for {test}: expected at least {expected} observations, got {actual}")]
    InsufficientData {
        test: String,
        expected: usize,
        actual: usize,
    },

    /// A computation produced NaN or an infinite value
    #[error("non-finite result in {0}")]
    NonFinite(String),

    /// Invalid input data
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Other errors
    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a test that lacks the observations it needs
    pub fn insufficient_data(test: &str, expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            test: test.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(context.to_string())
    }

    /// Whether this error is local to a single statistical test and should
    /// degrade to a "not computable" entry in the report instead of aborting
    /// the run.
    pub fn is_test_local(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::NonFinite(_) | Self::Computation(_)
        )
    }
}
