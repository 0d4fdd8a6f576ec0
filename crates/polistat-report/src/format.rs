//! Fixed numeric formatting for the report
//!
//! Non-finite handling is an explicit normalization step at this boundary:
//! every formatter renders NaN and infinities as a literal `N/A` instead of
//! letting them reach the artifact.

/// Placeholder for values that are undefined or non-finite
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency: two decimal places with thousands separators.
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rendered = format!("{:.2}", value.abs());
    let (integer, fraction) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));
    let grouped = group_thousands(integer);
    if value < 0.0 {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Percentage with one decimal place, from a fraction in [0, 1].
pub fn percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Percentage from an optional fraction; `None` marks an undefined ratio
/// (for example a sub-group percentage with zero total).
pub fn percent_opt(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => percent(f),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Plain number with the given decimal places.
pub fn number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(16884.924), "16,884.92");
        assert_eq!(currency(1338.0), "1,338.00");
        assert_eq!(currency(1000.0), "1,000.00");
        assert_eq!(currency(0.5), "0.50");
        assert_eq!(currency(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(currency(-4200.5), "-4,200.50");
    }

    #[test]
    fn test_currency_normalizes_non_finite() {
        assert_eq!(currency(f64::NAN), "N/A");
        assert_eq!(currency(f64::INFINITY), "N/A");
        assert_eq!(currency(f64::NEG_INFINITY), "N/A");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.2049), "20.5%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(f64::NAN), "N/A");
    }

    #[test]
    fn test_percent_opt() {
        assert_eq!(percent_opt(Some(0.5)), "50.0%");
        assert_eq!(percent_opt(None), "N/A");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(3.14159, 3), "3.142");
        assert_eq!(number(f64::NAN, 2), "N/A");
    }
}
