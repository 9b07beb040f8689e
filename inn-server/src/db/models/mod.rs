//! Database Models

pub mod booking;
pub mod serde_helpers;

// Re-exports
pub use booking::{BookingCreate, BookingInvoicePatch, BookingRecord, BookingStatusPatch};
