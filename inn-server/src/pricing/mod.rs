//! Stay Pricing
//!
//! Pure invoice calculation over nightly/weekly/monthly rate tiers.

pub mod engine;

pub use engine::compute_invoice;
