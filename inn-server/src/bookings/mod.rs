//! Booking Lifecycle
//!
//! State machine and orchestration for booking records: submission,
//! operator approval, invoice finalization and payment confirmation.

pub mod manager;
pub mod transitions;

pub use manager::{BookingManager, BookingRequest, ManualEntry};
