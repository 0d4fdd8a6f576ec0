//! Interpretable age and charges brackets
//!
//! Grouping labels used by report consumers; they do not feed the test
//! battery.

use serde::Serialize;
use std::fmt;

/// Age bracket with a reporting label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeBand {
    From18To25,
    From26To35,
    From36To45,
    From46To55,
    From56To65,
    Over65,
}

impl AgeBand {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=25 => Self::From18To25,
            26..=35 => Self::From26To35,
            36..=45 => Self::From36To45,
            46..=55 => Self::From46To55,
            56..=65 => Self::From56To65,
            _ => Self::Over65,
        }
    }

    pub fn range_str(&self) -> &'static str {
        match self {
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To45 => "36-45",
            Self::From46To55 => "46-55",
            Self::From56To65 => "56-65",
            Self::Over65 => "66+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::From18To25 => "Young Adult",
            Self::From26To35 => "Adult",
            Self::From36To45 => "Middle Age",
            Self::From46To55 => "Senior",
            Self::From56To65 => "Elder",
            Self::Over65 => "Super Senior",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.range_str(), self.label())
    }
}

/// Charges bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChargesBand {
    Under5k,
    From5kTo10k,
    From10kTo20k,
    From20kTo30k,
    From30kTo50k,
    Over50k,
}

impl ChargesBand {
    pub fn from_charges(charges: f64) -> Self {
        if charges < 5_000.0 {
            Self::Under5k
        } else if charges < 10_000.0 {
            Self::From5kTo10k
        } else if charges < 20_000.0 {
            Self::From10kTo20k
        } else if charges < 30_000.0 {
            Self::From20kTo30k
        } else if charges < 50_000.0 {
            Self::From30kTo50k
        } else {
            Self::Over50k
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under5k => "<5,000",
            Self::From5kTo10k => "5,000-9,999",
            Self::From10kTo20k => "10,000-19,999",
            Self::From20kTo30k => "20,000-29,999",
            Self::From30kTo50k => "30,000-49,999",
            Self::Over50k => "50,000+",
        }
    }
}

impl fmt::Display for ChargesBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(AgeBand::from_age(18), AgeBand::From18To25);
        assert_eq!(AgeBand::from_age(25), AgeBand::From18To25);
        assert_eq!(AgeBand::from_age(26), AgeBand::From26To35);
        assert_eq!(AgeBand::from_age(65), AgeBand::From56To65);
        assert_eq!(AgeBand::from_age(66), AgeBand::Over65);
    }

    #[test]
    fn test_age_band_labels() {
        assert_eq!(AgeBand::from_age(19).label(), "Young Adult");
        assert_eq!(AgeBand::from_age(70).label(), "Super Senior");
        assert_eq!(AgeBand::from_age(40).to_string(), "36-45 (Middle Age)");
    }

    #[test]
    fn test_charges_band_boundaries() {
        assert_eq!(ChargesBand::from_charges(4_999.99), ChargesBand::Under5k);
        assert_eq!(ChargesBand::from_charges(5_000.0), ChargesBand::From5kTo10k);
        assert_eq!(
            ChargesBand::from_charges(19_999.99),
            ChargesBand::From10kTo20k
        );
        assert_eq!(ChargesBand::from_charges(50_000.0), ChargesBand::Over50k);
    }
}
