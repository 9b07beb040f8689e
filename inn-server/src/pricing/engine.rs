//! Stay Pricing Engine
//!
//! Computes the lowest-cost decomposition of a stay into nightly, weekly
//! and monthly units. Uses rust_decimal for precise calculations, stores
//! as f64.
//!
//! Pure and side-effect free: the admin workflow invokes it repeatedly
//! during interactive recalculation without persisting anything.

use rust_decimal::prelude::*;
use shared::{InvoiceCalculation, RateStrategy, RateTable, StayInterval};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One component of a decomposition: count of units at a rate
struct Part {
    count: i64,
    unit: char,
    rate: f64,
}

/// Render the winning decomposition, listing only non-zero components:
/// "Calc: 1w @ 50000.00 + 3n @ 8000.00"
fn render_breakdown(parts: &[Part]) -> String {
    let body = parts
        .iter()
        .filter(|p| p.count > 0)
        .map(|p| format!("{}{} @ {:.2}", p.count, p.unit, p.rate))
        .collect::<Vec<_>>()
        .join(" + ");
    format!("Calc: {}", body)
}

/// Compute the invoice for a stay against a rate table.
///
/// The rate tier is selected once by guest count (2+ guests use the double
/// tier). Three decompositions are evaluated in fixed order — Nightly,
/// Weekly-priority, Monthly-priority — and a later strategy is adopted only
/// if strictly cheaper, so ties keep the earlier one.
///
/// A non-billable stay (no nights, or no guests) yields the Error
/// sentinel (total 0, breakdown naming the problem) rather than an Err:
/// callers check the strategy, never unwind.
pub fn compute_invoice(stay: &StayInterval, rates: &RateTable) -> InvoiceCalculation {
    let nights = stay.nights();
    if !stay.is_billable() {
        let breakdown = if nights < 1 {
            "Invalid dates"
        } else {
            "Invalid guest count"
        };
        return InvoiceCalculation {
            total: 0.0,
            currency: rates.currency.clone(),
            breakdown: breakdown.to_string(),
            strategy: RateStrategy::Error,
        };
    }

    let tier = rates.tier(stay.guests);
    let nightly = to_decimal(tier.nightly);
    let weekly = to_decimal(tier.weekly);
    let monthly = to_decimal(tier.monthly);

    // Nightly baseline: always computable
    let mut best = Decimal::from(nights) * nightly;
    let mut strategy = RateStrategy::Nightly;
    let mut parts = vec![Part {
        count: nights,
        unit: 'n',
        rate: tier.nightly,
    }];

    // Weekly priority: full weeks plus remaining nights
    let weeks = nights / 7;
    let week_rem = nights % 7;
    let weekly_total = Decimal::from(weeks) * weekly + Decimal::from(week_rem) * nightly;
    if weekly_total < best {
        best = weekly_total;
        strategy = RateStrategy::WeeklyPriority;
        parts = vec![
            Part {
                count: weeks,
                unit: 'w',
                rate: tier.weekly,
            },
            Part {
                count: week_rem,
                unit: 'n',
                rate: tier.nightly,
            },
        ];
    }

    // Monthly priority: a month is exactly 30 nights for decomposition,
    // remainder split into weeks and nights
    let months = nights / 30;
    let month_rem = nights % 30;
    let rem_weeks = month_rem / 7;
    let rem_nights = month_rem % 7;
    let monthly_total = Decimal::from(months) * monthly
        + Decimal::from(rem_weeks) * weekly
        + Decimal::from(rem_nights) * nightly;
    if monthly_total < best {
        best = monthly_total;
        strategy = RateStrategy::MonthlyPriority;
        parts = vec![
            Part {
                count: months,
                unit: 'm',
                rate: tier.monthly,
            },
            Part {
                count: rem_weeks,
                unit: 'w',
                rate: tier.weekly,
            },
            Part {
                count: rem_nights,
                unit: 'n',
                rate: tier.nightly,
            },
        ];
    }

    InvoiceCalculation {
        total: to_f64(best),
        currency: rates.currency.clone(),
        breakdown: render_breakdown(&parts),
        strategy,
    }
}
