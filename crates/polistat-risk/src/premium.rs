//! Deterministic premium estimation from a cleaned profile
//!
//! Rates derived from the analyzed portfolio: smoker/non-smoker base rates,
//! a linear age adjustment around the portfolio mean age, an obesity
//! surcharge, a per-child charge, and fixed regional multipliers.

use polistat_core::{PolicyRecord, Region, Smoker};
use serde::Serialize;

const NON_SMOKER_BASE: f64 = 8_434.0;
const SMOKER_BASE: f64 = 32_050.0;
const REFERENCE_AGE: f64 = 39.2;
const AGE_RATE: f64 = 250.0;
const OBESITY_SURCHARGE: f64 = 4_623.0;
const CHILD_RATE: f64 = 150.0;
const MINIMUM_PREMIUM: f64 = 1_000.0;

/// Itemized premium estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumQuote {
    pub base: f64,
    pub age_adjustment: f64,
    pub bmi_adjustment: f64,
    pub children_adjustment: f64,
    pub regional_multiplier: f64,
    pub total: f64,
}

fn regional_multiplier(region: Region) -> f64 {
    match region {
        Region::Southeast => 1.15,
        Region::Northeast => 1.08,
        Region::Northwest => 1.02,
        Region::Southwest => 1.00,
    }
}

/// Estimate an annual premium for one cleaned profile.
///
/// Deterministic and floored at the minimum premium.
pub fn estimate_premium(profile: &PolicyRecord) -> PremiumQuote {
    let base = match profile.smoker {
        Smoker::Yes => SMOKER_BASE,
        Smoker::No => NON_SMOKER_BASE,
    };
    let age_adjustment = (profile.age as f64 - REFERENCE_AGE) * AGE_RATE;
    let bmi_adjustment = if profile.bmi >= 30.0 {
        OBESITY_SURCHARGE
    } else {
        0.0
    };
    let children_adjustment = profile.children as f64 * CHILD_RATE;
    let multiplier = regional_multiplier(profile.region);

    let subtotal = base + age_adjustment + bmi_adjustment + children_adjustment;
    let total = (subtotal * multiplier).max(MINIMUM_PREMIUM);

    PremiumQuote {
        base,
        age_adjustment,
        bmi_adjustment,
        children_adjustment,
        regional_multiplier: multiplier,
        total,
    }
}
