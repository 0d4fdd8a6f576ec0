//! The Policy Record data model
//!
//! One record per policyholder, with enumerated domains for the categorical
//! fields so that invalid category literals are rejected at the ingestion
//! boundary instead of surfacing deep inside a later stage.

use serde::Serialize;
use std::fmt;

/// The seven columns every source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "age", "sex", "bmi", "children", "smoker", "region", "charges",
];

/// Post-cleaning bounds on `age`
pub const AGE_BOUNDS: (u32, u32) = (18, 100);
/// Post-cleaning bounds on `bmi`
pub const BMI_BOUNDS: (f64, f64) = (10.0, 60.0);
/// Post-cleaning upper bound on `children`
pub const MAX_CHILDREN: u32 = 10;

/// Policyholder sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }

    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smoking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub const ALL: [Smoker; 2] = [Smoker::Yes, Smoker::No];
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic region, one of the four fixed codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "northeast" => Some(Self::Northeast),
            "northwest" => Some(Self::Northwest),
            "southeast" => Some(Self::Southeast),
            "southwest" => Some(Self::Southwest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }

    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Northwest,
        Region::Southeast,
        Region::Southwest,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One policyholder's attributes plus billed charges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRecord {
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub children: u32,
    pub smoker: Smoker,
    pub region: Region,
    pub charges: f64,
}

impl PolicyRecord {
    /// Whether the record satisfies every post-cleaning range invariant.
    ///
    /// All four conditions combine with AND, so a record failing any one
    /// bound is rejected exactly once.
    pub fn within_bounds(&self) -> bool {
        (AGE_BOUNDS.0..=AGE_BOUNDS.1).contains(&self.age)
            && (BMI_BOUNDS.0..=BMI_BOUNDS.1).contains(&self.bmi)
            && self.children <= MAX_CHILDREN
            && self.charges > 0.0
    }
}
