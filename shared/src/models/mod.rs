//! Domain Models

pub mod booking;
pub mod invoice;
pub mod rates;
pub mod stay;

// Re-exports
pub use booking::{BookingStatus, EntryKind};
pub use invoice::{InvoiceCalculation, InvoiceSnapshot, RateStrategy};
pub use rates::{RateTable, TierRates};
pub use stay::StayInterval;
