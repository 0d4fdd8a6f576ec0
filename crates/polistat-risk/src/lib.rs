//! Risk feature derivation for cleaned policyholder records
//!
//! Every derivation is a deterministic, pure function of one record's own
//! fields; no feature depends on other rows. An empty dataset derives an
//! empty feature set.

pub mod bands;
pub mod bmi;
pub mod premium;
pub mod score;

pub use bands::{AgeBand, ChargesBand};
pub use bmi::BmiCategory;
pub use premium::{estimate_premium, PremiumQuote};
pub use score::{base_risk, risk_score, SMOKER_MULTIPLIER};

use polistat_core::{CleanedDataset, PolicyRecord};
use serde::Serialize;

/// Per-record derived features
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatures {
    pub bmi_category: BmiCategory,
    pub risk_score: f64,
    pub age_band: AgeBand,
    pub charges_band: ChargesBand,
}

impl DerivedFeatures {
    pub fn from_record(record: &PolicyRecord) -> Self {
        Self {
            bmi_category: BmiCategory::from_bmi(record.bmi),
            risk_score: risk_score(record),
            age_band: AgeBand::from_age(record.age),
            charges_band: ChargesBand::from_charges(record.charges),
        }
    }
}

/// Derive features for every record, in dataset order.
pub fn derive(dataset: &CleanedDataset) -> Vec<DerivedFeatures> {
    dataset
        .records()
        .iter()
        .map(DerivedFeatures::from_record)
        .collect()
}
