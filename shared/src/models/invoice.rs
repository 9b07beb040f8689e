//! Invoice Calculation Model

use serde::{Deserialize, Serialize};

/// Decomposition strategy chosen by the pricing engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateStrategy {
    Nightly,
    WeeklyPriority,
    MonthlyPriority,
    /// Degenerate result for a non-billable interval
    Error,
}

impl std::fmt::Display for RateStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RateStrategy::Nightly => "Nightly",
            RateStrategy::WeeklyPriority => "Weekly Priority",
            RateStrategy::MonthlyPriority => "Monthly Priority",
            RateStrategy::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Output of the pricing engine
///
/// Pure value, recomputed on demand. Never persisted as the source of truth;
/// a finalized copy goes onto the booking as an [`InvoiceSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCalculation {
    /// Total amount, rounded to 2 decimal places
    pub total: f64,
    pub currency: String,
    /// Human-readable decomposition, e.g. "Calc: 1w @ 50000.00 + 3n @ 8000.00"
    pub breakdown: String,
    pub strategy: RateStrategy,
}

impl InvoiceCalculation {
    pub fn is_error(&self) -> bool {
        self.strategy == RateStrategy::Error
    }
}

/// Invoice snapshot fixed onto a booking at finalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub amount: f64,
    pub currency: String,
    pub breakdown: String,
    pub strategy: RateStrategy,
    /// Email address the payment request was addressed to
    pub recipient: String,
    /// Finalization time (unix millis)
    pub finalized_at: i64,
}
