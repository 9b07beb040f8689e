//! Shared domain types for the guesthouse booking system
//!
//! Value types used by both the server core and client surfaces:
//!
//! - `models`: stay intervals, rate tables, invoice calculations, booking statuses
//! - `response`: uniform action-response envelope returned by lifecycle operations

pub mod models;
pub mod response;

// Re-export common types
pub use models::{
    BookingStatus, EntryKind, InvoiceCalculation, InvoiceSnapshot, RateStrategy, RateTable,
    StayInterval, TierRates,
};
pub use response::ActionResponse;
