//! Rate Table Model

use serde::{Deserialize, Serialize};

/// Nightly/weekly/monthly rates for one occupancy tier
///
/// Rates are stored as f64; all money arithmetic goes through rust_decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRates {
    pub nightly: f64,
    pub weekly: f64,
    pub monthly: f64,
}

/// Rate table: six rates keyed by occupancy tier (1 person vs 2+) plus currency
///
/// Configured by an operator, read-only to the pricing engine. The currency
/// code is fixed for the system's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub nightly_single: f64,
    pub weekly_single: f64,
    pub monthly_single: f64,
    pub nightly_double: f64,
    pub weekly_double: f64,
    pub monthly_double: f64,
    /// ISO 4217 currency code, e.g. "JPY"
    pub currency: String,
}

impl RateTable {
    /// Select the rate tier for a guest count: 2+ guests use the double tier
    pub fn tier(&self, guests: u32) -> TierRates {
        if guests >= 2 {
            TierRates {
                nightly: self.nightly_double,
                weekly: self.weekly_double,
                monthly: self.monthly_double,
            }
        } else {
            TierRates {
                nightly: self.nightly_single,
                weekly: self.weekly_single,
                monthly: self.monthly_single,
            }
        }
    }

    /// Check the table invariants: all six rates positive, 3-letter currency
    pub fn validate(&self) -> Result<(), String> {
        let rates = [
            ("nightly_single", self.nightly_single),
            ("weekly_single", self.weekly_single),
            ("monthly_single", self.monthly_single),
            ("nightly_double", self.nightly_double),
            ("weekly_double", self.weekly_double),
            ("monthly_double", self.monthly_double),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Rate '{}' must be a positive number", name));
            }
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!("Invalid currency code: {}", self.currency));
        }
        Ok(())
    }
}
